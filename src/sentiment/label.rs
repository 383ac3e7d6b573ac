// Three-way sentiment labels and the negativity check.
//
// Two cutoffs coexist: the label uses a ±0.05 dead zone around zero, while
// redaction treats anything strictly below DEFAULT_REDACT_BELOW as negative.
// A comment scoring -0.03 is therefore labelled Neutral but still redacted.

/// Compound score at or above which a comment is Positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
/// Compound score at or below which a comment is Negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;
/// Default cutoff for the redaction check: scores strictly below it redact.
pub const DEFAULT_REDACT_BELOW: f64 = 0.0;

/// The sentiment label attached to a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    /// Analysis failed; the comment carries no real label.
    Error,
}

impl SentimentLabel {
    /// Classify a compound score. Never returns `Error`.
    pub fn from_score(score: f64) -> Self {
        if score >= POSITIVE_THRESHOLD {
            SentimentLabel::Positive
        } else if score <= NEGATIVE_THRESHOLD {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Negative => "Negative",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Error => "Error",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The redaction check: true when `score` is strictly below `cutoff`.
pub fn is_negative(score: f64, cutoff: f64) -> bool {
    score < cutoff
}
