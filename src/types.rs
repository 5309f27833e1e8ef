use serde::{Deserialize, Serialize};
use std::ops::Range;

/// A single suggested correction as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub id: String,
    pub sentence: String,
    /// Offset of `sentence` within the submitted text.
    pub sentence_start: usize,
    /// Span offsets, relative to `sentence_start`.
    pub start: usize,
    pub end: usize,
    pub replacement: String,
    pub error_type: String,
    pub general_error_type: String,
}

impl Edit {
    /// Flagged span as offsets into the submitted text. Not checked against
    /// the text; the service owns these values.
    pub fn text_range(&self) -> Range<usize> {
        self.sentence_start.saturating_add(self.start)..self.sentence_start.saturating_add(self.end)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EditsResponse {
    pub edits: Vec<Edit>,
    /// Present when `auto_apply` was requested.
    #[serde(default)]
    pub applied_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Variety {
    #[serde(rename = "us-variety")]
    American,
    #[serde(rename = "gb-variety")]
    British,
    #[serde(rename = "au-variety")]
    Australian,
    #[serde(rename = "ca-variety")]
    Canadian,
    /// Don't suggest changes based on English variety.
    #[serde(rename = "null-variety")]
    Neutral,
}

#[derive(Debug, Clone, Default)]
pub struct EditOptions {
    pub session_id: Option<String>,
    pub variety: Option<Variety>,
    pub auto_apply: bool,
}

#[derive(Serialize, Clone)]
pub(crate) struct EditsRequest<'a> {
    pub key: &'a str,
    pub text: &'a str,
    pub session_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variety: Option<Variety>,
    pub auto_apply: bool,
}

#[derive(Serialize, Clone)]
pub(crate) struct FeedbackRequest<'a> {
    pub key: &'a str,
    pub session_id: &'a str,
}
