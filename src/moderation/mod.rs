// Comment moderation: word-level profanity masking and the sanitization
// pipeline that fully redacts negative comments.
//
// Masking is a plain set lookup per whitespace token. The sanitizer layers a
// sentiment check on top: a comment that reads as negative is replaced by a
// run of asterisks as long as the original text.

pub mod profanity;
pub mod sanitize;
