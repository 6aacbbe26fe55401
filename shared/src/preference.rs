use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How much someone would like to live in a region. Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceLevel {
    Never,
    Reluctantly,
    /// Older share links used `maybe` for the middle level.
    #[serde(alias = "maybe")]
    Neutral,
    Willing,
    Absolutely,
}

/// Fill for regions without a preference.
pub const UNRATED_COLOR: &str = "#9ca3af";

impl PreferenceLevel {
    pub const ALL: [PreferenceLevel; 5] = [
        PreferenceLevel::Never,
        PreferenceLevel::Reluctantly,
        PreferenceLevel::Neutral,
        PreferenceLevel::Willing,
        PreferenceLevel::Absolutely,
    ];

    /// Numeric code used by the legacy share formats.
    pub const fn code(self) -> u8 {
        match self {
            Self::Never => 0,
            Self::Reluctantly => 1,
            Self::Neutral => 2,
            Self::Willing => 3,
            Self::Absolutely => 4,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Never),
            1 => Some(Self::Reluctantly),
            2 => Some(Self::Neutral),
            3 => Some(Self::Willing),
            4 => Some(Self::Absolutely),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::Reluctantly => "reluctantly",
            Self::Neutral => "neutral",
            Self::Willing => "willing",
            Self::Absolutely => "absolutely",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Never => "Never",
            Self::Reluctantly => "Reluctantly",
            Self::Neutral => "Neutral",
            Self::Willing => "Willing",
            Self::Absolutely => "Absolutely",
        }
    }

    /// CSS hex color used for map fills and legend swatches.
    pub const fn color(self) -> &'static str {
        match self {
            Self::Never => "#dc2626",
            Self::Reluctantly => "#f59e0b",
            Self::Neutral => "#64748b",
            Self::Willing => "#22c55e",
            Self::Absolutely => "#15803d",
        }
    }

    pub const fn color_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Never => (0xdc, 0x26, 0x26),
            Self::Reluctantly => (0xf5, 0x9e, 0x0b),
            Self::Neutral => (0x64, 0x74, 0x8b),
            Self::Willing => (0x22, 0xc5, 0x5e),
            Self::Absolutely => (0x15, 0x80, 0x3d),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Never => "Absolutely would not live here",
            Self::Reluctantly => "Only if I absolutely had to",
            Self::Neutral => "No strong feelings either way",
            Self::Willing => "Would consider living here",
            Self::Absolutely => "Would love to live here",
        }
    }

    /// Position in [`PreferenceLevel::ALL`], handy for count arrays.
    pub const fn index(self) -> usize {
        self.code() as usize
    }
}

impl fmt::Display for PreferenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreferenceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "reluctantly" => Ok(Self::Reluctantly),
            "neutral" | "maybe" => Ok(Self::Neutral),
            "willing" => Ok(Self::Willing),
            "absolutely" => Ok(Self::Absolutely),
            other => Err(format!("unknown preference level: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PreferenceLevel;

    #[test]
    fn codes_map_bijectively_onto_levels() {
        for level in PreferenceLevel::ALL {
            assert_eq!(PreferenceLevel::from_code(level.code() as i64), Some(level));
        }
        let mut codes: Vec<u8> = PreferenceLevel::ALL.iter().map(|l| l.code()).collect();
        codes.dedup();
        assert_eq!(codes, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn out_of_range_codes_are_rejected() {
        assert_eq!(PreferenceLevel::from_code(5), None);
        assert_eq!(PreferenceLevel::from_code(-1), None);
    }

    #[test]
    fn maybe_is_read_as_neutral() {
        let level: PreferenceLevel = serde_json::from_str("\"maybe\"").expect("parse maybe");
        assert_eq!(level, PreferenceLevel::Neutral);
        assert_eq!("Maybe".parse::<PreferenceLevel>(), Ok(PreferenceLevel::Neutral));
        assert_eq!(
            serde_json::to_string(&PreferenceLevel::Neutral).expect("serialize"),
            "\"neutral\""
        );
    }

    #[test]
    fn hex_and_rgb_colors_agree() {
        for level in PreferenceLevel::ALL {
            let (r, g, b) = level.color_rgb();
            assert_eq!(level.color(), format!("#{r:02x}{g:02x}{b:02x}"));
        }
    }
}
