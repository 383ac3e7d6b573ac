// Profanity set and word-level masking.

use std::collections::HashSet;

/// Words blocked out of the box. Matching is case-insensitive.
pub const DEFAULT_BLOCKED_WORDS: &[&str] = &["russia", "ukraine", "iran", "war"];

/// A fixed set of lowercase blocked words.
///
/// Built once at startup (defaults plus any configured extras) and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct ProfanitySet {
    words: HashSet<String>,
}

impl Default for ProfanitySet {
    fn default() -> Self {
        Self::with_extra(std::iter::empty::<&str>())
    }
}

impl ProfanitySet {
    /// The default set extended with `extra` words. Extras are trimmed and
    /// lowercased; blank entries are ignored.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words: HashSet<String> = DEFAULT_BLOCKED_WORDS
            .iter()
            .map(|w| w.to_string())
            .collect();

        for word in extra {
            let word = word.as_ref().trim().to_lowercase();
            if !word.is_empty() {
                words.insert(word);
            }
        }

        Self { words }
    }

    /// Whether `word` is blocked, ignoring case.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// True if any whitespace-delimited token of `text` is blocked.
    pub fn contains_profanity(&self, text: &str) -> bool {
        text.split_whitespace().any(|token| self.contains(token))
    }

    /// Replace every blocked token with `*` repeated once per character.
    ///
    /// Tokens are rejoined with single spaces, so runs of whitespace collapse
    /// but the word count is always preserved.
    pub fn mask_profanity(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| {
                if self.contains(token) {
                    "*".repeat(token.chars().count())
                } else {
                    token.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
