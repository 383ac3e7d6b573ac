// Google Translate web endpoint implementation.
//
// Uses the public `translate_a/single` endpoint (client=gtx) that needs no
// API key. The response is a positional JSON array rather than an object:
//
//   [[["Hello", "Bonjour", null, null, 10], ...], null, "fr", ...]
//
// Element [0] holds the translated segments (segment[0] is the translated
// text) and element [2] holds the detected source language.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::traits::{Translator, ENGLISH};
use crate::output::truncate_chars;

/// Default endpoint for the translation web API.
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com";

/// HTTP client for the Google Translate web endpoint.
pub struct GoogleTranslator {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleTranslator {
    /// Create a translator pointing at `base_url`. Every request is bounded
    /// by `timeout` so an unreachable service fails instead of hanging.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("cybertron/0.1 (comment-moderation)")
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn query(&self, text: &str, source: &str, target: &str) -> Result<Value> {
        let url = format!("{}/translate_a/single", self.base_url);

        debug!(
            source = source,
            target = target,
            text_preview = %truncate_chars(text, 50),
            "Translation request"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .context("Translation API request failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Translation API returned {}: {}", status, body);
        }

        response
            .json::<Value>()
            .await
            .context("Failed to parse translation response")
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn detect(&self, text: &str) -> Result<String> {
        let body = self.query(text, "auto", ENGLISH).await?;
        parse_detected_language(&body)
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let body = self.query(text, source, target).await?;
        parse_translation(&body)
    }
}

/// Pull the detected source language out of a response body.
pub fn parse_detected_language(body: &Value) -> Result<String> {
    body.get(2)
        .and_then(Value::as_str)
        .filter(|lang| !lang.is_empty())
        .map(str::to_string)
        .context("Translation response has no detected language")
}

/// Join the translated segments of a response body.
pub fn parse_translation(body: &Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .context("Translation response has no segments")?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.is_empty() {
        anyhow::bail!("Translation response contained empty segments");
    }
    Ok(translated)
}
