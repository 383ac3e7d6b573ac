// Comment sanitization pipeline.
//
// Step 1 masks blocked words. Step 2 checks the compound sentiment of the
// original text: anything below the redaction cutoff is discarded wholesale
// and replaced with asterisks matching the original's character count.

use tracing::debug;

use super::profanity::ProfanitySet;
use crate::sentiment::label::{is_negative, DEFAULT_REDACT_BELOW};
use crate::sentiment::traits::SentimentScorer;

/// Masks profanity and fully redacts negative comments.
#[derive(Debug, Clone)]
pub struct Sanitizer {
    pub profanity: ProfanitySet,
    /// Compound scores strictly below this redact the whole comment.
    pub redact_below: f64,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            profanity: ProfanitySet::default(),
            redact_below: DEFAULT_REDACT_BELOW,
        }
    }
}

impl Sanitizer {
    pub fn new(profanity: ProfanitySet, redact_below: f64) -> Self {
        Self {
            profanity,
            redact_below,
        }
    }

    /// Run the full pipeline on `comment`.
    pub fn mask_bad_comment(&self, comment: &str, scorer: &dyn SentimentScorer) -> String {
        let masked = self.profanity.mask_profanity(comment);

        let score = scorer.compound(comment);
        if is_negative(score, self.redact_below) {
            debug!(score, "Redacting negative comment");
            return redact(comment);
        }

        masked
    }
}

/// A run of `*` as long as `text` in characters.
pub fn redact(text: &str) -> String {
    "*".repeat(text.chars().count())
}
