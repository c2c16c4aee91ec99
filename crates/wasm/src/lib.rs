//! WASM bindings for interview-citation.

use interview_citation_core::citation::citation_text;
use interview_citation_core::dialog::{CitationDialog, DialogOptions};
use interview_citation_core::params::{parse_records, CitationParams};
use wasm_bindgen::prelude::*;

fn single_record(params_json: &str) -> Result<Option<CitationParams>, JsValue> {
    let mut records = parse_records(params_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    if records.len() != 1 {
        return Err(JsValue::from_str("Expected a single citation record"));
    }
    Ok(records.remove(0))
}

/// Format a citation from a JSON record. `null` yields an empty string.
#[wasm_bindgen]
pub fn format_citation(params_json: &str) -> Result<String, JsValue> {
    let record = single_record(params_json)?;
    Ok(citation_text(record.as_ref()))
}

/// Text to show in the citation dialog: the citation, or the placeholder when empty.
#[wasm_bindgen]
pub fn display_citation(params_json: &str) -> Result<String, JsValue> {
    let record = single_record(params_json)?;
    let dialog = CitationDialog::new(record.as_ref(), DialogOptions::default());
    Ok(dialog.display_text().to_string())
}

/// Dialog subtitle ("... this recording" / "... this video").
#[wasm_bindgen]
pub fn citation_subtitle(params_json: &str) -> Result<String, JsValue> {
    let record = single_record(params_json)?;
    let dialog = CitationDialog::new(record.as_ref(), DialogOptions::default());
    Ok(dialog.subtitle())
}
