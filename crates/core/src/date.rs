//! Year extraction from free-form recording dates.

use once_cell::sync::Lazy;
use regex::Regex;

static FOUR_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{4}").unwrap());

/// Pull a year out of a free-form date string.
///
/// The first four consecutive ASCII digits win, wherever they sit. Dateless strings fall
/// back to their first four characters after trimming.
pub fn extract_year(recording_date: Option<&str>) -> String {
    let date = match recording_date {
        Some(d) if !d.is_empty() => d,
        _ => return String::new(),
    };
    if let Some(m) = FOUR_DIGITS.find(date) {
        return m.as_str().to_string();
    }
    date.trim().chars().take(4).collect()
}
