// Sentiment scorer trait.

/// Proportions of negative, neutral and positive content plus the
/// normalized compound score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    /// Overall sentiment from -1.0 (most negative) to 1.0 (most positive)
    pub compound: f64,
}

/// Trait for scoring the sentiment of a piece of text.
///
/// Scoring is synchronous: implementations are expected to run locally.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;

    /// The compound score alone.
    fn compound(&self, text: &str) -> f64 {
        self.polarity_scores(text).compound
    }
}
