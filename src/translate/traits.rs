// Translator trait: the swap-ready abstraction over detection/translation.

use anyhow::Result;
use async_trait::async_trait;

/// Language code the analysis pipeline works in.
pub const ENGLISH: &str = "en";

/// Trait for detecting a text's language and translating it. Implementations
/// are async because most providers are remote HTTP services.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Detect the language of `text`, returning a code like `"en"` or `"fr"`.
    async fn detect(&self, text: &str) -> Result<String>;

    /// Translate `text` from `source` to `target`.
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

/// Offline translator: reports every text as English and never translates.
///
/// Used when translation is switched off (`--no-translate` or
/// `CYBERTRON_TRANSLATOR=off`).
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    async fn detect(&self, _text: &str) -> Result<String> {
        Ok(ENGLISH.to_string())
    }

    async fn translate(&self, text: &str, _source: &str, _target: &str) -> Result<String> {
        Ok(text.to_string())
    }
}
