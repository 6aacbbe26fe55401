use std::fmt::Write as _;
use std::path::Path;

use axum::extract::{RawQuery, State};
use axum::http::{HeaderValue, StatusCode, Uri, header};
use axum::response::{Html, IntoResponse, Response};

use prefmap_shared::codec::{load_from_query, share_url};
use prefmap_shared::{PreferenceStats, SharedState, registry};

use crate::config::META_MARKER;
use crate::state::AppState;

const DEFAULT_DESCRIPTION: &str =
    "Mark where you would and would not live, see your stats, and share your map with a link.";

/// The client shell, with preview tags describing any shared map in the query.
pub async fn index(State(state): State<AppState>, RawQuery(query): RawQuery) -> Response {
    let meta = render_meta(&state.public_origin, query.as_deref());
    let mut response = Html(inject_meta(&state.index_template, &meta)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    response
}

/// Deep links get the app shell; anything that looks like a file is a real 404.
pub async fn spa_fallback(
    state: State<AppState>,
    uri: Uri,
    query: RawQuery,
) -> Response {
    if Path::new(uri.path()).extension().is_some() {
        return StatusCode::NOT_FOUND.into_response();
    }
    index(state, query).await
}

pub(crate) fn render_meta(origin: &str, query: Option<&str>) -> String {
    let shared = load_from_query(query.unwrap_or_default());
    let title = format!("{} Living Preference Map", shared.map.display_name());
    let description = describe(&shared);
    let url = share_url(origin, shared.map, &shared.store).unwrap_or_else(|e| {
        tracing::warn!(error = %e, origin, "could not build share url");
        origin.to_owned()
    });

    let title = escape_html(&title);
    let description = escape_html(&description);
    let url = escape_html(&url);

    let mut out = String::new();
    let _ = writeln!(out, "<title>{title}</title>");
    let _ = writeln!(out, r#"<meta name="description" content="{description}" />"#);
    let _ = writeln!(out, r#"<meta property="og:type" content="website" />"#);
    let _ = writeln!(out, r#"<meta property="og:title" content="{title}" />"#);
    let _ = writeln!(out, r#"<meta property="og:description" content="{description}" />"#);
    let _ = writeln!(out, r#"<meta property="og:url" content="{url}" />"#);
    let _ = writeln!(out, r#"<meta name="twitter:card" content="summary" />"#);
    let _ = writeln!(out, r#"<meta name="twitter:title" content="{title}" />"#);
    let _ = write!(out, r#"<meta name="twitter:description" content="{description}" />"#);
    out
}

fn describe(shared: &SharedState) -> String {
    if shared.store.is_empty() {
        return DEFAULT_DESCRIPTION.to_owned();
    }
    let map = shared.map;
    PreferenceStats::compute(map, shared.store.get(map), registry(map).len()).summary()
}

/// Replace the marker; templates without one get the tags before `</head>`.
pub(crate) fn inject_meta(template: &str, meta: &str) -> String {
    if template.contains(META_MARKER) {
        return template.replacen(META_MARKER, meta, 1);
    }
    match template.find("</head>") {
        Some(at) => {
            let mut out = String::with_capacity(template.len() + meta.len());
            out.push_str(&template[..at]);
            out.push_str(meta);
            out.push_str(&template[at..]);
            out
        }
        None => template.to_owned(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use prefmap_shared::codec::share_query;
    use prefmap_shared::{MapType, PreferenceLevel, PreferenceStore};

    const ORIGIN: &str = "https://example.test";

    #[test]
    fn plain_visit_gets_generic_description() {
        let meta = render_meta(ORIGIN, None);
        assert!(meta.contains("<title>United States Living Preference Map</title>"));
        assert!(meta.contains(DEFAULT_DESCRIPTION));
        assert!(meta.contains(r#"content="https://example.test/?map=USA""#));
    }

    #[test]
    fn shared_map_is_summarised() {
        let mut store = PreferenceStore::new();
        store.set_preference(MapType::Canada, "BC", Some(PreferenceLevel::Absolutely));
        store.set_preference(MapType::Canada, "ON", Some(PreferenceLevel::Never));
        let query = share_query(MapType::Canada, &store).expect("share query");

        let meta = render_meta(ORIGIN, Some(&query));
        assert!(meta.contains("Canada Living Preference Map"));
        assert!(meta.contains("2 of 13 provinces rated: 1 absolutely, 1 never"));
    }

    #[test]
    fn legacy_links_are_summarised_too() {
        let meta = render_meta(ORIGIN, Some("prefs=CA4-TX0-NY3"));
        assert!(meta.contains("3 of 51 states rated: 1 absolutely, 1 willing, 1 never"));
    }

    #[test]
    fn marker_is_replaced_once() {
        let template = format!("<head>{META_MARKER}</head><body>{META_MARKER}</body>");
        let html = inject_meta(&template, "<title>x</title>");
        assert_eq!(
            html,
            format!("<head><title>x</title></head><body>{META_MARKER}</body>")
        );
    }

    #[test]
    fn missing_marker_falls_back_to_head() {
        assert_eq!(
            inject_meta("<head><meta charset=\"utf-8\"></head>", "<title>x</title>"),
            "<head><meta charset=\"utf-8\"><title>x</title></head>"
        );
        assert_eq!(inject_meta("no head", "<title>x</title>"), "no head");
    }

    #[test]
    fn escapes_attribute_content() {
        assert_eq!(escape_html(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&#39;");
    }
}
