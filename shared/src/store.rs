use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::map_type::MapType;
use crate::preference::PreferenceLevel;

/// One rated region. Serialized with the `stateId` key that existing share links use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePreference {
    #[serde(rename = "stateId", alias = "regionId")]
    pub region_id: String,
    pub preference: PreferenceLevel,
}

impl StatePreference {
    pub fn new(region_id: impl Into<String>, preference: PreferenceLevel) -> Self {
        Self {
            region_id: region_id.into(),
            preference,
        }
    }
}

/// What a [`PreferenceStore::set_preference`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    Inserted,
    Replaced { previous: PreferenceLevel },
    Removed,
    /// No level was selected; nothing changed.
    Ignored,
}

/// Preference lists per map type, in click order.
///
/// Maps with no rated regions have no entry, so two stores that rate the same
/// regions compare equal regardless of how they got there.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PreferenceStore {
    maps: BTreeMap<MapType, Vec<StatePreference>>,
}

impl PreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a click: same level toggles the region off, another level replaces
    /// it in place, an unrated region is appended.
    pub fn set_preference(
        &mut self,
        map: MapType,
        region_id: &str,
        level: Option<PreferenceLevel>,
    ) -> SetOutcome {
        let Some(level) = level else {
            return SetOutcome::Ignored;
        };

        let list = self.maps.entry(map).or_default();
        let outcome = match list.iter().position(|p| p.region_id == region_id) {
            Some(index) if list[index].preference == level => {
                list.remove(index);
                SetOutcome::Removed
            }
            Some(index) => {
                let previous = list[index].preference;
                list[index].preference = level;
                SetOutcome::Replaced { previous }
            }
            None => {
                list.push(StatePreference::new(region_id, level));
                SetOutcome::Inserted
            }
        };

        if list.is_empty() {
            self.maps.remove(&map);
        }
        tracing::debug!(map = %map, region = region_id, ?outcome, "preference updated");
        outcome
    }

    /// Clear one map, or every map when `map` is `None`.
    pub fn clear(&mut self, map: Option<MapType>) {
        match map {
            Some(map) => {
                self.maps.remove(&map);
            }
            None => self.maps.clear(),
        }
    }

    pub fn get(&self, map: MapType) -> &[StatePreference] {
        self.maps.get(&map).map_or(&[], Vec::as_slice)
    }

    pub fn preference_of(&self, map: MapType, region_id: &str) -> Option<PreferenceLevel> {
        self.get(map)
            .iter()
            .find(|p| p.region_id == region_id)
            .map(|p| p.preference)
    }

    pub fn rated_count(&self, map: MapType) -> usize {
        self.get(map).len()
    }

    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Maps that have at least one rated region.
    pub fn maps(&self) -> impl Iterator<Item = (MapType, &[StatePreference])> {
        self.maps.iter().map(|(map, list)| (*map, list.as_slice()))
    }

    /// Replace a whole map's list. Duplicate region ids collapse into the first
    /// position with the last level seen.
    pub fn replace_map(&mut self, map: MapType, entries: Vec<StatePreference>) {
        let mut list: Vec<StatePreference> = Vec::with_capacity(entries.len());
        for entry in entries {
            match list.iter_mut().find(|p| p.region_id == entry.region_id) {
                Some(existing) => existing.preference = entry.preference,
                None => list.push(entry),
            }
        }

        if list.is_empty() {
            self.maps.remove(&map);
        } else {
            self.maps.insert(map, list);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PreferenceStore, SetOutcome, StatePreference};
    use crate::map_type::MapType;
    use crate::preference::PreferenceLevel::{self, *};
    use proptest::prelude::*;

    #[test]
    fn click_inserts_replaces_and_toggles_off() {
        let mut store = PreferenceStore::new();

        assert_eq!(
            store.set_preference(MapType::Usa, "CA", Some(Willing)),
            SetOutcome::Inserted
        );
        assert_eq!(
            store.set_preference(MapType::Usa, "CA", Some(Absolutely)),
            SetOutcome::Replaced { previous: Willing }
        );
        assert_eq!(store.preference_of(MapType::Usa, "CA"), Some(Absolutely));

        assert_eq!(
            store.set_preference(MapType::Usa, "CA", Some(Absolutely)),
            SetOutcome::Removed
        );
        assert_eq!(store.preference_of(MapType::Usa, "CA"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn missing_level_is_a_no_op() {
        let mut store = PreferenceStore::new();
        store.set_preference(MapType::Usa, "TX", Some(Never));
        let before = store.clone();

        assert_eq!(
            store.set_preference(MapType::Usa, "TX", None),
            SetOutcome::Ignored
        );
        assert_eq!(store, before);
    }

    #[test]
    fn replacement_keeps_click_order() {
        let mut store = PreferenceStore::new();
        store.set_preference(MapType::Usa, "CA", Some(Willing));
        store.set_preference(MapType::Usa, "TX", Some(Never));
        store.set_preference(MapType::Usa, "CA", Some(Neutral));

        let ids: Vec<_> = store
            .get(MapType::Usa)
            .iter()
            .map(|p| p.region_id.as_str())
            .collect();
        assert_eq!(ids, ["CA", "TX"]);
    }

    #[test]
    fn clear_one_map_or_all() {
        let mut store = PreferenceStore::new();
        store.set_preference(MapType::Usa, "CA", Some(Willing));
        store.set_preference(MapType::Canada, "BC", Some(Absolutely));

        store.clear(Some(MapType::Usa));
        assert!(store.get(MapType::Usa).is_empty());
        assert_eq!(store.rated_count(MapType::Canada), 1);

        store.clear(None);
        assert!(store.is_empty());
    }

    #[test]
    fn replace_map_collapses_duplicates() {
        let mut store = PreferenceStore::new();
        store.replace_map(
            MapType::Usa,
            vec![
                StatePreference::new("CA", Never),
                StatePreference::new("TX", Willing),
                StatePreference::new("CA", Absolutely),
            ],
        );
        assert_eq!(
            store.get(MapType::Usa),
            &[
                StatePreference::new("CA", Absolutely),
                StatePreference::new("TX", Willing),
            ]
        );

        store.replace_map(MapType::Usa, Vec::new());
        assert!(store.is_empty());
    }

    #[test]
    fn serializes_with_state_id_keys() {
        let mut store = PreferenceStore::new();
        store.set_preference(MapType::Usa, "CA", Some(Absolutely));
        let json = serde_json::to_string(&store).expect("serialize store");
        assert_eq!(json, r#"{"USA":[{"stateId":"CA","preference":"absolutely"}]}"#);
    }

    fn level() -> impl Strategy<Value = PreferenceLevel> {
        prop::sample::select(PreferenceLevel::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn clicks_never_duplicate_a_region(
            clicks in prop::collection::vec(("[A-E]{2}", prop::option::of(level())), 0..64)
        ) {
            let mut store = PreferenceStore::new();
            for (region, level) in &clicks {
                store.set_preference(MapType::Usa, region, *level);
            }
            let list = store.get(MapType::Usa);
            for (i, a) in list.iter().enumerate() {
                for b in &list[i + 1..] {
                    prop_assert_ne!(&a.region_id, &b.region_id);
                }
            }
        }

        #[test]
        fn double_click_restores_region(
            seed in prop::collection::vec(("[A-E]{2}", level()), 0..16),
            region in "[A-E]{2}",
            level in level(),
        ) {
            let mut store = PreferenceStore::new();
            for (id, l) in &seed {
                store.set_preference(MapType::Usa, id, Some(*l));
            }
            let before = store.preference_of(MapType::Usa, &region);

            store.set_preference(MapType::Usa, &region, Some(level));
            store.set_preference(MapType::Usa, &region, Some(level));

            // Same level twice: either back to unrated, or back to the prior
            // level when the first click was itself a toggle-off.
            let after = store.preference_of(MapType::Usa, &region);
            if before == Some(level) {
                prop_assert_eq!(after, Some(level));
            } else {
                prop_assert_eq!(after, None);
            }
        }
    }
}
