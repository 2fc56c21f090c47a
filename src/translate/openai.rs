use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{TranslationError, Translations, Translator};
use crate::config::{API_KEY_ENV, Config};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

/// Translator backed by a `/chat/completions` endpoint.
#[derive(Debug, Clone)]
pub struct OpenAiTranslator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiTranslator {
    pub fn new(api_url: impl Into<String>, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: api_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Build a translator from config, falling back to the environment for the key.
    pub fn from_config(config: &Config) -> Result<Self, TranslationError> {
        let api_key = config
            .translation_api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| std::env::var(API_KEY_ENV).ok().filter(|k| !k.trim().is_empty()))
            .ok_or(TranslationError::MissingApiKey { env: API_KEY_ENV })?;

        Ok(Self::new(
            config.translation_api_url.clone(),
            api_key,
            config.translation_model.clone(),
        ))
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

impl Translator for OpenAiTranslator {
    async fn translate(
        &self,
        text: &str,
        source_locale: &str,
        target_locales: &[String],
    ) -> Result<Translations, TranslationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(text, source_locale, target_locales),
            }],
            response_format: ResponseFormat { kind: "json_object" },
        };

        debug!("POST {} (model {})", self.endpoint(), self.model);
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TranslationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_completion(&body)
    }
}

/// The single user prompt sent to the model.
pub fn build_prompt(text: &str, source_locale: &str, target_locales: &[String]) -> String {
    format!(
        "Translate the following text \"{}\" from \"{}\" to the following languages: {}. \
         Return ONLY a JSON object where keys are language codes and values are translations. \
         Example: {{\"cs\": \"Ahoj\", \"de\": \"Hallo\"}}",
        text,
        source_locale,
        target_locales.join(", ")
    )
}

/// Extract translations from a chat completion response body.
///
/// `choices[0].message.content` must hold a JSON object. Entries whose value
/// is not a string are dropped.
pub fn parse_completion(body: &str) -> Result<Translations, TranslationError> {
    let response: Value = serde_json::from_str(body)
        .map_err(|e| TranslationError::InvalidResponse(e.to_string()))?;

    let content = response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or(TranslationError::EmptyResponse)?;

    let parsed: Value = serde_json::from_str(content)
        .map_err(|e| TranslationError::InvalidResponse(format!("content is not JSON: {}", e)))?;
    let Value::Object(map) = parsed else {
        return Err(TranslationError::InvalidResponse(
            "content is not a JSON object".to_string(),
        ));
    };

    Ok(map
        .into_iter()
        .filter_map(|(locale, value)| match value {
            Value::String(text) => Some((locale, text)),
            other => {
                debug!("Dropping non-string translation for {}: {}", locale, other);
                None
            }
        })
        .collect())
}
