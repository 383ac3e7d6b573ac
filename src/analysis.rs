// Multilingual comment analysis.
//
// Detects the comment's language, translates non-English text to English,
// then runs the sanitization pipeline and the three-way classifier on the
// English text. Failures are tagged by stage so callers can tell a detection
// failure from a translation failure; `analyze_or_fallback` collapses all of
// them into the fixed error result shown to the user.

use thiserror::Error;
use tracing::{debug, warn};

use crate::moderation::sanitize::Sanitizer;
use crate::sentiment::label::SentimentLabel;
use crate::sentiment::traits::SentimentScorer;
use crate::translate::traits::{Translator, ENGLISH};

/// Masked text shown when analysis fails.
pub const ERROR_MASKED: &str = "Error analyzing comment.";
/// Language shown when analysis fails.
pub const ERROR_LANGUAGE: &str = "Unknown";

/// The outcome of analyzing one comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub masked: String,
    pub sentiment: SentimentLabel,
    /// Detected language code of the original text
    pub language: String,
}

impl Analysis {
    /// The fixed result used when analysis fails.
    pub fn failed() -> Self {
        Self {
            masked: ERROR_MASKED.to_string(),
            sentiment: SentimentLabel::Error,
            language: ERROR_LANGUAGE.to_string(),
        }
    }
}

/// Which stage of the analysis failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Detection,
    Translation,
    Unknown,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("language detection failed: {0:#}")]
    Detection(#[source] anyhow::Error),

    #[error("translation from {language} failed: {source:#}")]
    Translation {
        language: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("comment analysis failed: {0:#}")]
    Unknown(#[source] anyhow::Error),
}

impl AnalysisError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::Detection(_) => ErrorKind::Detection,
            AnalysisError::Translation { .. } => ErrorKind::Translation,
            AnalysisError::Unknown(_) => ErrorKind::Unknown,
        }
    }
}

/// Ties together the scorer, translator and sanitizer for a session.
pub struct CommentAnalyzer {
    scorer: Box<dyn SentimentScorer>,
    translator: Box<dyn Translator>,
    sanitizer: Sanitizer,
}

impl CommentAnalyzer {
    pub fn new(
        scorer: Box<dyn SentimentScorer>,
        translator: Box<dyn Translator>,
        sanitizer: Sanitizer,
    ) -> Self {
        Self {
            scorer,
            translator,
            sanitizer,
        }
    }

    pub fn scorer(&self) -> &dyn SentimentScorer {
        self.scorer.as_ref()
    }

    pub fn sanitizer(&self) -> &Sanitizer {
        &self.sanitizer
    }

    /// Analyze a comment, reporting which stage failed on error.
    pub async fn analyze(&self, comment: &str) -> Result<Analysis, AnalysisError> {
        let language = self
            .translator
            .detect(comment)
            .await
            .map_err(AnalysisError::Detection)?;

        if language.trim().is_empty() {
            return Err(AnalysisError::Unknown(anyhow::anyhow!(
                "translator returned an empty language code"
            )));
        }

        let english = if language == ENGLISH {
            comment.to_string()
        } else {
            debug!(language = %language, "Translating comment to English");
            self.translator
                .translate(comment, &language, ENGLISH)
                .await
                .map_err(|source| AnalysisError::Translation {
                    language: language.clone(),
                    source,
                })?
        };

        let masked = self
            .sanitizer
            .mask_bad_comment(&english, self.scorer.as_ref());
        let sentiment = SentimentLabel::from_score(self.scorer.compound(&english));

        Ok(Analysis {
            masked,
            sentiment,
            language,
        })
    }

    /// Analyze a comment, replacing any failure with [`Analysis::failed`].
    pub async fn analyze_or_fallback(&self, comment: &str) -> Analysis {
        match self.analyze(comment).await {
            Ok(analysis) => analysis,
            Err(e) => {
                warn!(kind = ?e.kind(), error = %e, "Comment analysis failed");
                Analysis::failed()
            }
        }
    }
}
