//! Machine translation collaborator.
//!
//! The catalog store only needs two calls: translate one text, or translate a
//! batch that comes back in the same order and length. Everything behind
//! that (HTTP, prompts, models) is opaque to the store, and any problem is a
//! [`TranslateError`] the store records instead of propagating.
//!
//! ## Implementations
//!
//! - [`RemoteTranslator`]: OpenAI-compatible chat-completions endpoint
//! - [`DisabledTranslator`]: always fails, used when no API key is configured

mod remote;

use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub use remote::RemoteTranslator;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("translation is disabled: {0}")]
    Disabled(String),

    #[error("translation request failed: {0}")]
    Request(String),

    #[error("malformed translation response: {0}")]
    MalformedResponse(String),

    #[error("expected {expected} translations, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Translate text from the source language into a target language.
///
/// Languages are passed by display name (e.g. "Portuguese"), which is what a
/// text-generation model understands best.
#[enum_dispatch]
pub trait Translate {
    fn translate_one(&self, text: &str, target: &str, source: &str)
    -> Result<String, TranslateError>;

    /// Translate every text; the result has the same length and order.
    fn translate_many(
        &self,
        texts: &[String],
        target: &str,
        source: &str,
    ) -> Result<Vec<String>, TranslateError>;
}

/// The translator chosen from configuration.
#[enum_dispatch(Translate)]
#[derive(Debug)]
pub enum Translator {
    Remote(RemoteTranslator),
    Disabled(DisabledTranslator),
}

/// A translator that refuses every request with a fixed reason.
#[derive(Debug, Clone)]
pub struct DisabledTranslator {
    reason: String,
}

impl DisabledTranslator {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Translate for DisabledTranslator {
    fn translate_one(&self, _: &str, _: &str, _: &str) -> Result<String, TranslateError> {
        Err(TranslateError::Disabled(self.reason.clone()))
    }

    fn translate_many(&self, _: &[String], _: &str, _: &str) -> Result<Vec<String>, TranslateError> {
        Err(TranslateError::Disabled(self.reason.clone()))
    }
}
