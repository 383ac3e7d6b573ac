// Sentiment scoring: trait-based abstraction over the compound scorer.
//
// The SentimentScorer trait defines the interface. VaderScorer (the default)
// wraps the full VADER model; LexiconScorer implements the same rule-based
// valence model over a compact or user-supplied word lexicon. Both run
// locally with no API calls. The three-way label and the stricter negativity
// check both sit on top of the compound score.

pub mod label;
pub mod lexicon;
pub mod traits;
pub mod vader;
