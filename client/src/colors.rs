use prefmap_shared::PreferenceLevel;
use prefmap_shared::preference::UNRATED_COLOR;

/// Format RGBA as a CSS color string.
pub fn rgba_css(r: u8, g: u8, b: u8, a: f64) -> String {
    format!("rgba({r},{g},{b},{a})")
}

/// Translucent tint of a level's color, for selected-button backgrounds.
pub fn level_tint(level: PreferenceLevel, alpha: f64) -> String {
    let (r, g, b) = level.color_rgb();
    rgba_css(r, g, b, alpha)
}

/// Fill and opacity for a region on the map.
pub fn region_fill(level: Option<PreferenceLevel>) -> (&'static str, f64) {
    match level {
        Some(level) => (level.color(), 1.0),
        None => (UNRATED_COLOR, 0.9),
    }
}
