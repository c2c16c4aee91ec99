//! Personal-name reordering for bibliography entries.

/// Reorder a full name to "Last, First Middle".
///
/// Whitespace runs separate tokens. A single-token name (or an empty one) comes back
/// trimmed and otherwise unchanged.
pub fn to_last_first(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.split_last() {
        Some((last, given)) if !given.is_empty() => format!("{}, {}", last, given.join(" ")),
        _ => name.trim().to_string(),
    }
}
