// Session log — the ordered, in-memory list of processed comments.
//
// The session owns every CommentRecord for the life of the process. Nothing
// is persisted unless it is explicitly saved/exported or picked up by the
// periodic auto-save.

pub mod export;
pub mod models;

use tracing::info;

use crate::sentiment::label::SentimentLabel;
use crate::sentiment::traits::SentimentScorer;
use models::CommentRecord;

/// Negative comments needed before the threshold warning fires.
pub const DEFAULT_NEGATIVE_LIMIT: usize = 3;

/// Raised once the session holds at least `limit` negative comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdWarning {
    pub negative_count: usize,
    pub limit: usize,
}

impl ThresholdWarning {
    pub fn message(&self) -> String {
        format!(
            "You have typed {} bad comments (limit {}). You have been blocked for the next 24 hours.",
            self.negative_count, self.limit
        )
    }
}

/// In-memory comment history for one session.
#[derive(Debug)]
pub struct Session {
    records: Vec<CommentRecord>,
    negative_limit: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_NEGATIVE_LIMIT)
    }
}

impl Session {
    pub fn new(negative_limit: usize) -> Self {
        Self {
            records: Vec::new(),
            negative_limit,
        }
    }

    /// Append a record at the end of the log.
    pub fn append(&mut self, record: CommentRecord) {
        info!(
            language = %record.language,
            sentiment = %record.sentiment,
            total = self.records.len() + 1,
            "Comment recorded"
        );
        self.records.push(record);
    }

    pub fn records(&self) -> &[CommentRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn negative_limit(&self) -> usize {
        self.negative_limit
    }

    pub fn negative_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.sentiment == SentimentLabel::Negative)
            .count()
    }

    /// The threshold warning, if the negative count has reached the limit.
    ///
    /// There is no latch: once the limit is met, every later check fires again.
    pub fn threshold_warning(&self) -> Option<ThresholdWarning> {
        let negative_count = self.negative_count();
        (negative_count >= self.negative_limit).then_some(ThresholdWarning {
            negative_count,
            limit: self.negative_limit,
        })
    }

    /// Compound score of each original comment, in submission order.
    ///
    /// Scores are recomputed on every call rather than stored on the record.
    pub fn sentiment_series(&self, scorer: &dyn SentimentScorer) -> Vec<f64> {
        self.records
            .iter()
            .map(|r| scorer.compound(&r.original))
            .collect()
    }
}
