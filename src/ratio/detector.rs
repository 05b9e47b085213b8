use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern for a water volume typed into the form
    /// Matches: optional sign, number (optional fraction, optional scientific notation),
    /// optional whitespace + "ml" suffix in any case
    /// Examples: "675", "337.5", ".5", "1e3", "675 ml", "250mL", "-10"
    static ref VOLUME_PATTERN: Regex = Regex::new(
        r"^(?P<number>[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)\s*(?i:ml)?$"
    ).unwrap();
}

/// Parse a water volume in milliliters from raw form text.
///
/// Always uses `.` as decimal separator. Sign and finiteness are not checked
/// here, so `"-10"` parses; `WaterVolume` rejects it afterwards.
pub fn parse_volume(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let caps = VOLUME_PATTERN.captures(trimmed)?;
    caps.name("number")?.as_str().parse::<f64>().ok()
}

/// Check if a string looks like a water volume
pub fn looks_like_volume(s: &str) -> bool {
    parse_volume(s).is_some()
}
