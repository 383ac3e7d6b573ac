// Full VADER scorer backed by the `vader_sentiment` crate.
//
// This is the default scorer. It carries the complete published lexicon
// (profanity, slang, emoticons and emoji included), which the compact
// built-in table in `lexicon.rs` only samples.

use tracing::debug;
use vader_sentiment::SentimentIntensityAnalyzer;

use super::traits::{PolarityScores, SentimentScorer};

pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        debug!("Loading full VADER lexicon");
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        PolarityScores {
            neg: get("neg"),
            neu: get("neu"),
            pos: get("pos"),
            compound: get("compound"),
        }
    }
}
