use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{CitationError, ParamsError};

/// Bibliographic metadata for one recorded interview.
/// Built by the caller and consumed once by the formatter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CitationParams {
    pub interview_title: String,
    #[serde(default)]
    pub participants: Option<Vec<String>>,
    #[serde(default)]
    pub recording_date: Option<String>,
    #[serde(default)]
    pub interview_duration_seconds: Option<f64>,
    #[serde(default)]
    pub is_audio: bool,
    #[serde(default)]
    pub archive_name: String,
    #[serde(default)]
    pub page_url: String,
}

impl CitationParams {
    pub fn medium(&self) -> Medium {
        if self.is_audio {
            Medium::Audio
        } else {
            Medium::Video
        }
    }

    /// The participant credited as author, if any were listed.
    pub fn lead_participant(&self) -> Option<&str> {
        self.participants
            .as_deref()
            .and_then(|p| p.first())
            .map(|s| s.as_str())
    }
}

/// Recording format of the cited item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medium {
    Audio,
    Video,
}

impl Medium {
    /// Label used inside the citation.
    pub fn label(self) -> &'static str {
        match self {
            Medium::Audio => "Audio",
            Medium::Video => "Video",
        }
    }

    /// Lowercase noun for prose ("this recording", "this video").
    pub fn noun(self) -> &'static str {
        match self {
            Medium::Audio => "recording",
            Medium::Video => "video",
        }
    }
}

/// Parse citation input from JSON.
///
/// Accepts a single record, an array of records, or `null`. `null` entries stand for
/// "no metadata supplied" and come back as `None`.
pub fn parse_records(json: &str) -> Result<Vec<Option<CitationParams>>, ParamsError> {
    let value: Value = serde_json::from_str(json)?;
    match value {
        Value::Array(items) => items.into_iter().map(record_from_value).collect(),
        other => Ok(vec![record_from_value(other)?]),
    }
}

/// Read and parse citation input from a file or stdin.
pub fn read_records<R: Read>(mut reader: R) -> Result<Vec<Option<CitationParams>>, CitationError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    Ok(parse_records(&content)?)
}

fn record_from_value(value: Value) -> Result<Option<CitationParams>, ParamsError> {
    match value {
        Value::Null => Ok(None),
        Value::Object(_) => Ok(Some(serde_json::from_value(value)?)),
        _ => Err(ParamsError::UnexpectedShape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "interviewTitle": "Life in the Delta",
            "participants": ["Jane Q. Public", "Sam Roe"],
            "recordingDate": "1987-05-02",
            "interviewDurationSeconds": 3725,
            "isAudio": true,
            "archiveName": "Delta Oral History Project",
            "pageUrl": "https://example.org/x"
        }"#;
        let records = parse_records(json).unwrap();
        let p = records[0].as_ref().unwrap();
        assert_eq!(p.interview_title, "Life in the Delta");
        assert_eq!(p.lead_participant(), Some("Jane Q. Public"));
        assert_eq!(p.interview_duration_seconds, Some(3725.0));
        assert_eq!(p.medium(), Medium::Audio);
    }

    #[test]
    fn optional_fields_default() {
        let records = parse_records(r#"{"interviewTitle": "Untitled"}"#).unwrap();
        let p = records[0].as_ref().unwrap();
        assert_eq!(p.participants, None);
        assert_eq!(p.recording_date, None);
        assert_eq!(p.interview_duration_seconds, None);
        assert_eq!(p.archive_name, "");
        assert_eq!(p.medium(), Medium::Video);
    }

    #[test]
    fn null_and_arrays() {
        assert_eq!(parse_records("null").unwrap(), vec![None]);
        let records = parse_records(r#"[{"interviewTitle": "A"}, null]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert!(records[0].is_some());
        assert!(records[1].is_none());
    }

    #[test]
    fn rejects_scalars_and_missing_title() {
        assert!(matches!(parse_records("42"), Err(ParamsError::UnexpectedShape)));
        assert!(matches!(parse_records(r#"{"isAudio": true}"#), Err(ParamsError::Json(_))));
        assert!(matches!(parse_records("{not json"), Err(ParamsError::Json(_))));
    }

    #[test]
    fn read_records_reports_io_and_parse_errors() {
        let ok = read_records(std::io::Cursor::new(r#"{"interviewTitle": "A"}"#)).unwrap();
        assert_eq!(ok.len(), 1);

        let bad = read_records(std::io::Cursor::new("[1, 2]"));
        assert!(matches!(bad, Err(CitationError::Params(ParamsError::UnexpectedShape))));

        let not_utf8 = read_records(std::io::Cursor::new(vec![0xff, 0xfe]));
        assert!(matches!(not_utf8, Err(CitationError::Io(_))));
    }

    #[test]
    fn empty_participant_list_has_no_lead() {
        let p = CitationParams {
            interview_title: "T".to_string(),
            participants: Some(Vec::new()),
            ..Default::default()
        };
        assert_eq!(p.lead_participant(), None);
    }
}
