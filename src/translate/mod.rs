//! Machine translation of key values.
//!
//! ## Module Structure
//!
//! - `openai`: Client for OpenAI-compatible chat completion APIs

pub mod openai;

use std::collections::BTreeMap;

use thiserror::Error;

pub use openai::{OpenAiTranslator, build_prompt, parse_completion};

/// Locale tag to translated text.
pub type Translations = BTreeMap<String, String>;

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("no translation API key configured (set 'translationApiKey' or {env})")]
    MissingApiKey { env: &'static str },

    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("translation API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("translation API returned no content")]
    EmptyResponse,

    #[error("translation API returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// A service that translates one text into several locales.
pub trait Translator {
    /// Translate `text` from `source_locale` into each of `target_locales`.
    ///
    /// The result may lack some targets when the service omits them.
    fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locales: &[String],
    ) -> impl Future<Output = Result<Translations, TranslationError>>;
}
