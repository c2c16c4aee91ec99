//! Headless model of the citation dialog: open state, placeholder fallback, copy action
//! and the transient "copied" indicator.

use std::time::{Duration, Instant};

use crate::citation::citation_text;
use crate::error::ClipboardError;
use crate::params::{CitationParams, Medium};

pub const DEFAULT_PLACEHOLDER: &str = "No citation available.";
pub const DEFAULT_COPIED_INDICATOR: Duration = Duration::from_millis(2000);

/// Destination for the copy action. Implement this for a platform clipboard, a terminal
/// escape sequence, or a test double.
pub trait ClipboardSink {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone)]
pub struct DialogOptions {
    pub placeholder: String,
    pub copied_indicator: Duration,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            copied_indicator: DEFAULT_COPIED_INDICATOR,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CitationDialog {
    open: bool,
    medium: Option<Medium>,
    citation: String,
    copied_until: Option<Instant>,
    options: DialogOptions,
}

impl CitationDialog {
    pub fn new(params: Option<&CitationParams>, options: DialogOptions) -> Self {
        Self {
            open: false,
            medium: params.map(|p| p.medium()),
            citation: citation_text(params),
            copied_until: None,
            options,
        }
    }

    /// Replace the cited record. Any pending "copied" indicator refers to the old text
    /// and is dropped.
    pub fn set_params(&mut self, params: Option<&CitationParams>) {
        self.medium = params.map(|p| p.medium());
        self.citation = citation_text(params);
        self.copied_until = None;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.copied_until = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The formatted citation; empty when no record was supplied.
    pub fn citation(&self) -> &str {
        &self.citation
    }

    pub fn display_text(&self) -> &str {
        if self.citation.is_empty() {
            &self.options.placeholder
        } else {
            &self.citation
        }
    }

    pub fn subtitle(&self) -> String {
        let noun = self.medium.unwrap_or(Medium::Video).noun();
        format!("Chicago style citation for this {}", noun)
    }

    pub fn can_copy(&self) -> bool {
        !self.citation.is_empty()
    }

    /// Write the citation to `sink`. Returns whether the indicator was armed.
    ///
    /// A failed write is swallowed: the indicator stays off and nothing is retried.
    pub fn copy(&mut self, sink: &mut dyn ClipboardSink, now: Instant) -> bool {
        if !self.can_copy() {
            return false;
        }
        match sink.write_text(&self.citation) {
            Ok(()) => {
                self.copied_until = Some(now + self.options.copied_indicator);
                true
            }
            Err(e) => {
                tracing::debug!("Clipboard write failed: {}", e);
                self.copied_until = None;
                false
            }
        }
    }

    pub fn is_copied(&self, now: Instant) -> bool {
        self.copied_until.map_or(false, |until| now < until)
    }

    pub fn cancel_copied_indicator(&mut self) {
        self.copied_until = None;
    }

    pub fn copy_label(&self, now: Instant) -> &'static str {
        if self.is_copied(now) {
            "Copied!"
        } else {
            "Copy citation"
        }
    }
}
