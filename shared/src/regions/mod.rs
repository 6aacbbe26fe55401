//! Static region tables, one registry per map type.

mod asia;
mod canada;
mod europe;
mod france;
mod japan;
mod usa;

use crate::map_type::MapType;

/// A single addressable map unit (state, province, country, prefecture).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
}

/// Lookup table for one map type.
#[derive(Debug)]
pub struct Registry {
    pub map_type: MapType,
    regions: &'static [Region],
    /// Alternative spellings and codes found in boundary data and old links.
    aliases: &'static [(&'static str, &'static str)],
    /// Boundary features that exist in the source data but are not rendered or rated.
    excluded: &'static [&'static str],
}

static USA: Registry = Registry {
    map_type: MapType::Usa,
    regions: usa::REGIONS,
    aliases: usa::ALIASES,
    excluded: &[],
};

static CANADA: Registry = Registry {
    map_type: MapType::Canada,
    regions: canada::REGIONS,
    aliases: canada::ALIASES,
    excluded: &[],
};

static EUROPE: Registry = Registry {
    map_type: MapType::Europe,
    regions: europe::REGIONS,
    aliases: europe::ALIASES,
    excluded: europe::EXCLUDED,
};

static JAPAN: Registry = Registry {
    map_type: MapType::Japan,
    regions: japan::REGIONS,
    aliases: japan::ALIASES,
    excluded: &[],
};

static FRANCE: Registry = Registry {
    map_type: MapType::France,
    regions: france::REGIONS,
    aliases: france::ALIASES,
    excluded: &[],
};

static ASIA: Registry = Registry {
    map_type: MapType::Asia,
    regions: asia::REGIONS,
    aliases: asia::ALIASES,
    excluded: &[],
};

pub fn registry(map_type: MapType) -> &'static Registry {
    match map_type {
        MapType::Usa => &USA,
        MapType::Canada => &CANADA,
        MapType::Europe => &EUROPE,
        MapType::Japan => &JAPAN,
        MapType::France => &FRANCE,
        MapType::Asia => &ASIA,
    }
}

impl Registry {
    pub fn regions(&self) -> &'static [Region] {
        self.regions
    }

    /// Number of rateable regions; the denominator for progress.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&'static Region> {
        self.regions.iter().find(|region| region.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display name for a region id, falling back to the id itself.
    pub fn name<'a>(&self, id: &'a str) -> &'a str {
        self.get(id).map_or(id, |region| region.name)
    }

    pub fn excluded(&self) -> &'static [&'static str] {
        self.excluded
    }

    pub fn is_excluded(&self, raw: &str) -> bool {
        let raw = raw.trim();
        self.excluded
            .iter()
            .any(|entry| entry.eq_ignore_ascii_case(raw))
    }

    /// Map an id, alias, or display name to the canonical region id.
    pub fn resolve(&self, raw: &str) -> Option<&'static str> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        if let Some(region) = self.get(raw) {
            return Some(region.id);
        }
        if let Some((_, id)) = self.aliases.iter().find(|(alias, _)| *alias == raw) {
            return Some(*id);
        }
        self.regions
            .iter()
            .find(|region| {
                region.id.eq_ignore_ascii_case(raw) || region.name.eq_ignore_ascii_case(raw)
            })
            .map(|region| region.id)
            .or_else(|| {
                self.aliases
                    .iter()
                    .find(|(alias, _)| alias.eq_ignore_ascii_case(raw))
                    .map(|(_, id)| *id)
            })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::registry;
    use crate::map_type::MapType;

    #[test]
    fn region_ids_are_unique_per_map() {
        for map in MapType::ALL {
            let reg = registry(map);
            let ids: HashSet<_> = reg.regions().iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), reg.len(), "duplicate id in {map}");
        }
    }

    #[test]
    fn aliases_point_at_known_regions() {
        for map in MapType::ALL {
            let reg = registry(map);
            for (alias, id) in reg.aliases {
                assert!(reg.contains(id), "{map}: alias {alias} -> unknown {id}");
            }
        }
    }

    #[test]
    fn region_counts_match_datasets() {
        assert_eq!(registry(MapType::Usa).len(), 51);
        assert_eq!(registry(MapType::Canada).len(), 13);
        assert_eq!(registry(MapType::Japan).len(), 47);
        assert_eq!(registry(MapType::France).len(), 18);
    }

    #[test]
    fn resolves_aliases_and_names() {
        let usa = registry(MapType::Usa);
        assert_eq!(usa.resolve("Washington DC"), Some("DC"));
        assert_eq!(usa.resolve("Washington, D.C."), Some("DC"));
        assert_eq!(usa.resolve("California"), Some("CA"));
        assert_eq!(usa.resolve("tx"), Some("TX"));
        assert_eq!(usa.resolve("Atlantis"), None);

        let japan = registry(MapType::Japan);
        assert_eq!(japan.resolve("1"), Some("01"));
        assert_eq!(japan.resolve("13"), Some("13"));
        assert_eq!(japan.resolve("Tokyo"), Some("13"));

        let france = registry(MapType::France);
        assert_eq!(france.resolve("08"), Some("Île-de-France"));
    }

    #[test]
    fn europe_excludes_micro_states() {
        let europe = registry(MapType::Europe);
        assert!(europe.is_excluded("Monaco"));
        assert!(europe.is_excluded("va"));
        assert!(!europe.is_excluded("France"));
        for entry in europe.excluded() {
            assert!(!europe.contains(entry));
        }
    }

    #[test]
    fn name_falls_back_to_id() {
        let usa = registry(MapType::Usa);
        assert_eq!(usa.name("NY"), "New York");
        assert_eq!(usa.name("ZZ"), "ZZ");
    }
}
