use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The geographic dataset a preference list belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum MapType {
    #[default]
    #[serde(rename = "USA")]
    Usa,
    Canada,
    Europe,
    Japan,
    France,
    Asia,
}

impl MapType {
    pub const ALL: [MapType; 6] = [
        MapType::Usa,
        MapType::Canada,
        MapType::Europe,
        MapType::Japan,
        MapType::France,
        MapType::Asia,
    ];

    /// Wire name, as used in the `map` query parameter and the share token keys.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usa => "USA",
            Self::Canada => "Canada",
            Self::Europe => "Europe",
            Self::Japan => "Japan",
            Self::France => "France",
            Self::Asia => "Asia",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Usa => "United States",
            Self::Canada => "Canada",
            Self::Europe => "Europe",
            Self::Japan => "Japan",
            Self::France => "France",
            Self::Asia => "Asia",
        }
    }

    pub const fn flag(self) -> &'static str {
        match self {
            Self::Usa => "\u{1F1FA}\u{1F1F8}",
            Self::Canada => "\u{1F1E8}\u{1F1E6}",
            Self::Europe => "\u{1F1EA}\u{1F1FA}",
            Self::Japan => "\u{1F1EF}\u{1F1F5}",
            Self::France => "\u{1F1EB}\u{1F1F7}",
            Self::Asia => "\u{1F30F}",
        }
    }

    /// Query parameter carrying this map's list in the legacy per-map format.
    pub fn legacy_param(self) -> String {
        format!("prefs{}", self.as_str())
    }

    /// What one region of this map is called, singular or plural.
    pub const fn unit(self, count: usize) -> &'static str {
        let one = count == 1;
        match self {
            Self::Usa => {
                if one {
                    "state"
                } else {
                    "states"
                }
            }
            Self::Canada => {
                if one {
                    "province"
                } else {
                    "provinces"
                }
            }
            Self::Europe | Self::Asia => {
                if one {
                    "country"
                } else {
                    "countries"
                }
            }
            Self::Japan => {
                if one {
                    "prefecture"
                } else {
                    "prefectures"
                }
            }
            Self::France => {
                if one {
                    "region"
                } else {
                    "regions"
                }
            }
        }
    }

    /// File name of the boundary GeoJSON for this map.
    pub fn boundary_file(self) -> String {
        format!("{}.json", self.as_str().to_ascii_lowercase())
    }

    /// Parse the `map` query parameter, falling back to USA for anything unknown.
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MapType::ALL
            .into_iter()
            .find(|map| map.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown map type: {s}"))
    }
}
