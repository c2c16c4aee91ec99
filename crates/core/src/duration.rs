//! Recording length rendering (`H:MM:SS` / `M:SS`).

/// Format a duration given in seconds.
///
/// Returns an empty string for negative or non-finite input, which callers treat as
/// "no duration available". Fractional seconds are truncated.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return String::new();
    }
    let h = (seconds / 3600.0).floor() as u64;
    let m = ((seconds % 3600.0) / 60.0).floor() as u64;
    let s = (seconds % 60.0).floor() as u64;
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{}:{:02}", m, s)
    }
}
