use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::moderation::profanity::ProfanitySet;
use crate::moderation::sanitize::Sanitizer;
use crate::sentiment::label::DEFAULT_REDACT_BELOW;
use crate::session::export::{DEFAULT_AUTOSAVE_PATH, DEFAULT_AUTOSAVE_SECS};
use crate::session::DEFAULT_NEGATIVE_LIMIT;
use crate::translate::google::DEFAULT_TRANSLATE_URL;

/// Which translation backend to use.
#[derive(Debug, Clone, PartialEq)]
pub enum TranslatorBackend {
    /// Google Translate web endpoint (default)
    Google,
    /// No network: every comment is treated as English
    Off,
}

/// Central configuration loaded from environment variables.
///
/// Every value has a default, so an empty environment is a valid setup.
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    pub translator_backend: TranslatorBackend,
    /// Base URL of the translation endpoint
    pub translate_url: String,
    /// Per-request timeout for translation calls
    pub request_timeout: Duration,
    /// File the session is auto-saved to
    pub autosave_path: PathBuf,
    pub autosave_interval: Duration,
    /// Negative comments before the threshold warning fires
    pub negative_limit: usize,
    /// Extra blocked words on top of the built-in set
    pub blocked_words: Vec<String>,
    /// Compound scores strictly below this redact the whole comment
    pub redact_below: f64,
    /// Optional lexicon file; when set it replaces the VADER scorer
    pub lexicon_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            translator_backend: TranslatorBackend::Google,
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            request_timeout: Duration::from_secs(10),
            autosave_path: PathBuf::from(DEFAULT_AUTOSAVE_PATH),
            autosave_interval: Duration::from_secs(DEFAULT_AUTOSAVE_SECS),
            negative_limit: DEFAULT_NEGATIVE_LIMIT,
            blocked_words: Vec::new(),
            redact_below: DEFAULT_REDACT_BELOW,
            lexicon_path: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();

        let translator_backend = match env::var("CYBERTRON_TRANSLATOR").as_deref() {
            Ok("off") | Ok("none") => TranslatorBackend::Off,
            // "google" or unset both default to Google
            _ => TranslatorBackend::Google,
        };

        let blocked_words = env::var("CYBERTRON_BLOCKED_WORDS")
            .map(|raw| parse_word_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            translator_backend,
            translate_url: env::var("CYBERTRON_TRANSLATE_URL")
                .unwrap_or(defaults.translate_url),
            request_timeout: parse_var::<u64>("CYBERTRON_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            autosave_path: env::var("CYBERTRON_AUTOSAVE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.autosave_path),
            autosave_interval: parse_var::<u64>("CYBERTRON_AUTOSAVE_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.autosave_interval),
            negative_limit: parse_var("CYBERTRON_NEGATIVE_LIMIT")?
                .unwrap_or(defaults.negative_limit),
            blocked_words,
            redact_below: parse_var("CYBERTRON_REDACT_BELOW")?.unwrap_or(defaults.redact_below),
            lexicon_path: env::var("CYBERTRON_LEXICON_PATH").ok().map(PathBuf::from),
        })
    }

    /// Build the sanitizer described by this configuration.
    pub fn sanitizer(&self) -> Sanitizer {
        Sanitizer::new(
            ProfanitySet::with_extra(&self.blocked_words),
            self.redact_below,
        )
    }

    /// Check that the numeric settings make sense together.
    pub fn validate(&self) -> Result<()> {
        if self.autosave_interval.is_zero() {
            anyhow::bail!("CYBERTRON_AUTOSAVE_SECS must be at least 1");
        }
        if self.negative_limit == 0 {
            anyhow::bail!("CYBERTRON_NEGATIVE_LIMIT must be at least 1");
        }
        if !(-1.0..=1.0).contains(&self.redact_below) {
            anyhow::bail!(
                "CYBERTRON_REDACT_BELOW must be between -1.0 and 1.0 (got {})",
                self.redact_below
            );
        }
        Ok(())
    }
}

/// Read and parse an optional variable. Unset or blank means `None`;
/// anything unparsable is an error naming the variable.
fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .with_context(|| format!("{name} has an invalid value: {raw:?}")),
        _ => Ok(None),
    }
}

/// Split a comma-separated word list, dropping blanks.
pub fn parse_word_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
