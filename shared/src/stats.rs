use crate::map_type::MapType;
use crate::preference::PreferenceLevel;
use crate::store::StatePreference;

/// Progress badge shown under the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Milestone {
    FirstRated,
    GettingStarted,
    OnARoll,
    Halfway,
    AlmostThere,
    Complete,
}

/// Maps smaller than this never get the percentage milestones.
const PERCENT_MILESTONE_MIN_TOTAL: usize = 10;

impl Milestone {
    /// Milestone for `rated` out of `total` regions, if any.
    pub fn for_progress(rated: usize, total: usize) -> Option<Self> {
        if rated == 0 {
            return None;
        }
        if rated == total {
            return Some(Self::Complete);
        }
        if rated == 1 {
            return Some(Self::FirstRated);
        }
        match rated {
            5 => return Some(Self::GettingStarted),
            10 => return Some(Self::OnARoll),
            _ => {}
        }
        let large = total > PERCENT_MILESTONE_MIN_TOTAL;
        // rated / total >= 0.8, in integers
        if large && rated * 5 >= total * 4 {
            return Some(Self::AlmostThere);
        }
        if large && rated * 2 >= total {
            return Some(Self::Halfway);
        }
        None
    }

    pub const fn emoji(self) -> &'static str {
        match self {
            Self::FirstRated => "\u{1F3AF}",
            Self::GettingStarted => "\u{1F680}",
            Self::OnARoll => "\u{1F525}",
            Self::Halfway => "\u{2B50}",
            Self::AlmostThere => "\u{1F3C6}",
            Self::Complete => "\u{1F389}",
        }
    }

    pub fn text(self, map: MapType) -> String {
        match self {
            Self::FirstRated => format!("First {} rated!", map.unit(1)),
            Self::GettingStarted => "Getting started!".to_owned(),
            Self::OnARoll => "On a roll!".to_owned(),
            Self::Halfway => "Halfway hero!".to_owned(),
            Self::AlmostThere => "Almost there!".to_owned(),
            Self::Complete => "Perfect completion!".to_owned(),
        }
    }
}

/// Aggregates for one map's preference list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStats {
    pub map: MapType,
    /// Indexed by [`PreferenceLevel::index`].
    pub counts: [usize; 5],
    pub rated: usize,
    pub total: usize,
}

impl PreferenceStats {
    pub fn compute(map: MapType, preferences: &[StatePreference], total: usize) -> Self {
        let mut counts = [0usize; 5];
        for pref in preferences {
            counts[pref.preference.index()] += 1;
        }
        Self {
            map,
            counts,
            rated: preferences.len(),
            total,
        }
    }

    pub fn count(&self, level: PreferenceLevel) -> usize {
        self.counts[level.index()]
    }

    /// Share of the map that has been rated, rounded to a whole percent.
    pub fn progress_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.rated as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// Share of rated regions at `level`, in percent.
    pub fn level_percent(&self, level: PreferenceLevel) -> f64 {
        if self.rated == 0 {
            return 0.0;
        }
        self.count(level) as f64 / self.rated as f64 * 100.0
    }

    pub fn milestone(&self) -> Option<Milestone> {
        Milestone::for_progress(self.rated, self.total)
    }

    /// One-line summary, e.g. "3 of 51 states rated: 2 absolutely, 1 never".
    pub fn summary(&self) -> String {
        let mut out = format!(
            "{} of {} {} rated",
            self.rated,
            self.total,
            self.map.unit(self.total)
        );
        let parts: Vec<String> = PreferenceLevel::ALL
            .iter()
            .rev()
            .filter(|level| self.count(**level) > 0)
            .map(|level| format!("{} {}", self.count(*level), level.as_str()))
            .collect();
        if !parts.is_empty() {
            out.push_str(": ");
            out.push_str(&parts.join(", "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::{Milestone, PreferenceStats};
    use crate::map_type::MapType;
    use crate::preference::PreferenceLevel::*;
    use crate::store::StatePreference;

    #[test]
    fn milestones_for_fifty_one_regions() {
        assert_eq!(Milestone::for_progress(0, 51), None);
        assert_eq!(Milestone::for_progress(1, 51), Some(Milestone::FirstRated));
        assert_eq!(Milestone::for_progress(2, 51), None);
        assert_eq!(Milestone::for_progress(5, 51), Some(Milestone::GettingStarted));
        assert_eq!(Milestone::for_progress(10, 51), Some(Milestone::OnARoll));
        assert_eq!(Milestone::for_progress(26, 51), Some(Milestone::Halfway));
        assert_eq!(Milestone::for_progress(41, 51), Some(Milestone::AlmostThere));
        assert_eq!(Milestone::for_progress(51, 51), Some(Milestone::Complete));
    }

    #[test]
    fn small_maps_skip_percentage_milestones() {
        // Canada: 13 provinces and territories, still "large".
        assert_eq!(Milestone::for_progress(7, 13), Some(Milestone::Halfway));
        assert_eq!(Milestone::for_progress(5, 8), Some(Milestone::GettingStarted));
        assert_eq!(Milestone::for_progress(6, 8), None);
        assert_eq!(Milestone::for_progress(1, 1), Some(Milestone::Complete));
    }

    #[test]
    fn exact_counts_beat_percentages() {
        assert_eq!(Milestone::for_progress(10, 13), Some(Milestone::OnARoll));
        assert_eq!(Milestone::for_progress(5, 9), Some(Milestone::GettingStarted));
        assert_eq!(Milestone::for_progress(11, 13), Some(Milestone::AlmostThere));
        assert_eq!(Milestone::for_progress(9, 13), Some(Milestone::Halfway));
    }

    #[test]
    fn milestone_text_names_the_unit() {
        assert_eq!(Milestone::FirstRated.text(MapType::Usa), "First state rated!");
        assert_eq!(Milestone::FirstRated.text(MapType::Japan), "First prefecture rated!");
    }

    #[test]
    fn counts_and_percentages() {
        let prefs = vec![
            StatePreference::new("CA", Absolutely),
            StatePreference::new("TX", Never),
            StatePreference::new("NY", Absolutely),
            StatePreference::new("WA", Willing),
        ];
        let stats = PreferenceStats::compute(MapType::Usa, &prefs, 51);

        assert_eq!(stats.count(Absolutely), 2);
        assert_eq!(stats.count(Neutral), 0);
        assert_eq!(stats.rated, 4);
        assert_eq!(stats.progress_percent(), 8);
        assert!((stats.level_percent(Absolutely) - 50.0).abs() < f64::EPSILON);
        assert_eq!(
            stats.summary(),
            "4 of 51 states rated: 2 absolutely, 1 willing, 1 never"
        );
    }

    #[test]
    fn empty_map_has_zero_progress() {
        let stats = PreferenceStats::compute(MapType::Canada, &[], 0);
        assert_eq!(stats.progress_percent(), 0);
        assert_eq!(stats.level_percent(Never), 0.0);
        assert_eq!(stats.milestone(), None);
        assert_eq!(stats.summary(), "0 of 0 provinces rated");
    }
}
