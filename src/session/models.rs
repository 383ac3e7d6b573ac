// Comment records: the rows of the session log.

use chrono::{DateTime, Local};

use crate::analysis::Analysis;
use crate::sentiment::label::SentimentLabel;

/// One submitted comment and what the pipeline made of it.
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub original: String,
    pub masked: String,
    /// Detected language code (or "Unknown" when analysis failed)
    pub language: String,
    pub sentiment: SentimentLabel,
    /// Display only; never written to the export formats.
    pub submitted_at: DateTime<Local>,
}

impl CommentRecord {
    /// Build a record from the original text and its analysis, stamped now.
    pub fn new(original: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            original: original.into(),
            masked: analysis.masked,
            language: analysis.language,
            sentiment: analysis.sentiment,
            submitted_at: Local::now(),
        }
    }
}
