//! Share-link encoding for preference stores.
//!
//! Three generations of link exist in the wild:
//!
//! - `prefs=<token>&map=<map>`: the whole store as JSON, compressed with the
//!   lz-string "encoded URI component" transform. The only format written.
//! - `prefsUSA=CA4-TX0&prefsCanada=...`: one list per map. Entries are
//!   `<id><code>` with a two character id, or `<id>,<code>` for longer ids.
//! - `prefs=CA4-TX0&map=<map>`: a single bare list for one map.
//!
//! Decoding never fails outward. Each branch that cannot be read is logged
//! and treated as having no preferences.

use std::collections::{BTreeMap, HashMap};

use url::Url;

use crate::map_type::MapType;
use crate::preference::PreferenceLevel;
use crate::regions::registry;
use crate::store::{PreferenceStore, StatePreference};

pub const MAP_PARAM: &str = "map";
pub const PREFS_PARAM: &str = "prefs";

const LEGACY_ID_LEN: usize = 2;

#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("malformed preference entry `{0}`")]
    InvalidEntry(String),
    #[error("preference code `{0}` is not a number")]
    InvalidCode(String),
    #[error("preference code {0} is out of range")]
    UnknownLevel(i64),
    #[error("share token could not be decompressed")]
    Decompress,
    #[error("share token is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid origin: {0}")]
    Url(#[from] url::ParseError),
}

/// Which link generation a store was recovered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShareSource {
    #[default]
    Empty,
    Token,
    LegacyPerMap,
    LegacyBare,
}

/// Initial state recovered from a page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SharedState {
    pub map: MapType,
    pub store: PreferenceStore,
    pub source: ShareSource,
}

/// Compress a store into a URL-safe token.
pub fn encode_token(store: &PreferenceStore) -> Result<String, CodecError> {
    let json = serde_json::to_string(store)?;
    Ok(lz_str::compress_to_encoded_uri_component(json.as_str()))
}

/// Inverse of [`encode_token`]. Unknown map keys are skipped.
pub fn decode_token(token: &str) -> Result<PreferenceStore, CodecError> {
    // Form decoding turns an unescaped `+` into a space.
    let token = token.trim().replace(' ', "+");
    let raw = lz_str::decompress_from_encoded_uri_component(token.as_str())
        .ok_or(CodecError::Decompress)?;
    let json = String::from_utf16(&raw).map_err(|_| CodecError::Decompress)?;
    if json.is_empty() {
        return Err(CodecError::Decompress);
    }

    let maps: BTreeMap<String, Vec<StatePreference>> = serde_json::from_str(&json)?;
    let mut store = PreferenceStore::new();
    for (key, list) in maps {
        match key.parse::<MapType>() {
            Ok(map) => store.replace_map(map, list),
            Err(e) => tracing::warn!(error = %e, "skipping unknown map in share token"),
        }
    }
    Ok(store)
}

/// Decode a dash-joined legacy list. Any bad entry fails the whole list.
pub fn decode_legacy(encoded: &str) -> Result<Vec<StatePreference>, CodecError> {
    let encoded = encoded.trim();
    if encoded.is_empty() {
        return Ok(Vec::new());
    }
    encoded.split('-').map(decode_legacy_entry).collect()
}

fn decode_legacy_entry(item: &str) -> Result<StatePreference, CodecError> {
    let (id, code) = match item.split_once(',') {
        Some(parts) => parts,
        None => {
            let Some((split, _)) = item.char_indices().nth(LEGACY_ID_LEN) else {
                return Err(CodecError::InvalidEntry(item.to_owned()));
            };
            item.split_at(split)
        }
    };
    if id.is_empty() {
        return Err(CodecError::InvalidEntry(item.to_owned()));
    }

    let code: i64 = code
        .trim()
        .parse()
        .map_err(|_| CodecError::InvalidCode(code.to_owned()))?;
    let level = PreferenceLevel::from_code(code).ok_or(CodecError::UnknownLevel(code))?;
    Ok(StatePreference::new(id, level))
}

/// Rewrite ids into the registry's spelling (`"1"` -> `"01"`, `"tx"` -> `"TX"`).
/// Ids the registry does not know are kept as written.
fn canonicalize(map: MapType, list: Vec<StatePreference>) -> Vec<StatePreference> {
    let registry = registry(map);
    list.into_iter()
        .map(|pref| match registry.resolve(&pref.region_id) {
            Some(id) if id != pref.region_id => StatePreference::new(id, pref.preference),
            _ => pref,
        })
        .collect()
}

fn canonicalize_store(store: PreferenceStore) -> PreferenceStore {
    let mut out = PreferenceStore::new();
    for (map, list) in store.maps() {
        out.replace_map(map, canonicalize(map, list.to_vec()));
    }
    out
}

/// Recover the initial map and store from a query string (with or without `?`).
///
/// Region ids are canonicalized against the registry so they match the ids
/// the map view renders.
pub fn load_from_query(query: &str) -> SharedState {
    let params = parse_query(query);
    let map = MapType::from_param(params.get(MAP_PARAM).map(String::as_str));
    let bare = params.get(PREFS_PARAM).filter(|value| !value.trim().is_empty());

    if let Some(value) = bare {
        match decode_token(value) {
            Ok(store) => {
                return SharedState {
                    map,
                    store: canonicalize_store(store),
                    source: ShareSource::Token,
                };
            }
            Err(e) => tracing::debug!(error = %e, "prefs is not a share token, trying legacy"),
        }
    }

    let per_map: Vec<(MapType, &String)> = MapType::ALL
        .into_iter()
        .filter_map(|m| params.get(&m.legacy_param()).map(|value| (m, value)))
        .collect();
    if !per_map.is_empty() {
        let mut store = PreferenceStore::new();
        for (m, value) in per_map {
            match decode_legacy(value) {
                Ok(list) => store.replace_map(m, canonicalize(m, list)),
                Err(e) => tracing::warn!(map = %m, error = %e, "failed to decode legacy preferences"),
            }
        }
        return SharedState {
            map,
            store,
            source: ShareSource::LegacyPerMap,
        };
    }

    if let Some(value) = bare {
        let mut store = PreferenceStore::new();
        match decode_legacy(value) {
            Ok(list) => store.replace_map(map, canonicalize(map, list)),
            Err(e) => tracing::warn!(map = %map, error = %e, "failed to decode preferences"),
        }
        return SharedState {
            map,
            store,
            source: ShareSource::LegacyBare,
        };
    }

    SharedState {
        map,
        ..SharedState::default()
    }
}

/// Query string (without `?`) for a share link.
pub fn share_query(map: MapType, store: &PreferenceStore) -> Result<String, CodecError> {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    query.append_pair(MAP_PARAM, map.as_str());
    if !store.is_empty() {
        query.append_pair(PREFS_PARAM, &encode_token(store)?);
    }
    Ok(query.finish())
}

/// Absolute share link rooted at `origin`.
pub fn share_url(origin: &str, map: MapType, store: &PreferenceStore) -> Result<String, CodecError> {
    let mut url = Url::parse(origin)?;
    url.set_path("/");
    url.set_fragment(None);
    url.set_query(Some(&share_query(map, store)?));
    Ok(url.into())
}

/// First value wins, like `URLSearchParams::get`.
fn parse_query(query: &str) -> HashMap<String, String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = HashMap::new();
    for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(key.into_owned())
            .or_insert_with(|| value.into_owned());
    }
    params
}
