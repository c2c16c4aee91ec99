//! Chicago-style bibliography entry for a recorded interview.
//! Format: `Author. "Title." Archive Name, Year. Medium, Duration. URL`

use once_cell::sync::Lazy;
use regex::Regex;

use crate::date::extract_year;
use crate::duration::format_duration;
use crate::names::to_last_first;
use crate::params::CitationParams;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());
static DANGLING_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r",\s*\.").unwrap());

/// Format a recording's metadata as a Chicago-style citation.
///
/// Never fails: empty or malformed fields drop out of the output, and the final
/// normalization removes the `, .` left behind by an empty segment.
pub fn format_chicago_citation(params: &CitationParams) -> String {
    let title = params.interview_title.as_str();

    let author = match params.lead_participant() {
        Some(lead) => to_last_first(lead),
        None if title.contains(',') => title.to_string(),
        None => to_last_first(title),
    };
    let quoted_title = if title.contains('"') {
        title.to_string()
    } else {
        format!("\"{}\"", title)
    };
    let year = extract_year(params.recording_date.as_deref());
    let medium = params.medium().label();
    let duration = params
        .interview_duration_seconds
        .map(format_duration)
        .unwrap_or_default();
    let duration_part = if duration.is_empty() {
        ".".to_string()
    } else {
        format!(" {}.", duration)
    };

    let parts = [
        format!("{}. {}.", author, quoted_title),
        if params.archive_name.is_empty() {
            String::new()
        } else {
            format!("{},", params.archive_name)
        },
        if year.is_empty() {
            ".".to_string()
        } else {
            format!(" {}.", year)
        },
        format!(" {},{}", medium, duration_part),
        if params.page_url.is_empty() {
            String::new()
        } else {
            format!(" {}", params.page_url)
        },
    ];

    let joined = parts.join(" ");
    let collapsed = WHITESPACE_RUN.replace_all(&joined, " ");
    let normalized = DANGLING_COMMA.replace_all(&collapsed, ".");
    normalized.trim().to_string()
}

/// Citation text for an optional record. Empty when nothing was supplied.
pub fn citation_text(params: Option<&CitationParams>) -> String {
    params.map(format_chicago_citation).unwrap_or_default()
}
