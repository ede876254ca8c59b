use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TipError;
use crate::source::{TipFuture, TipSource};

/// Base URL of the generative language API.
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const PERSONA: &str = "You are a kind old watchmaker explaining clock mechanisms to curious \
children. Answer in two or three short, vivid sentences and avoid jargon.";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// The key travels in this header so it never shows up in a URL, and so
/// never in a transport error either.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Tip source backed by the Gemini `generateContent` endpoint.
pub struct GeminiSource {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiSource {
    /// Builds a source for `model`. Fails early when the key is blank so the
    /// studio can fall back to the offline source at startup.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self, TipError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(TipError::MissingApiKey);
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(TipError::from)?;
        Ok(Self { client, endpoint: DEFAULT_ENDPOINT.to_owned(), model: model.into(), api_key })
    }

    /// Points the source at a different base URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.endpoint.trim_end_matches('/'), self.model)
    }

    async fn generate(&self, topic: &str) -> Result<String, TipError> {
        let response = self
            .client
            .post(self.url())
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateRequest::new(topic))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    log::debug!("could not read error body for HTTP {status}: {}", e.without_url());
                    String::new()
                }
            };
            return Err(TipError::Status { code: status.as_u16(), body });
        }

        let body: GenerateResponse = response.json().await?;
        body.into_text()
    }
}

impl TipSource for GeminiSource {
    fn name(&self) -> &str {
        "gemini"
    }

    fn explain<'a>(&'a self, topic: &'a str) -> TipFuture<'a> {
        Box::pin(self.generate(topic))
    }
}

// ── wire types ────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    system_instruction: Content,
    contents: Vec<Content>,
}

impl GenerateRequest {
    fn new(topic: &str) -> Self {
        Self {
            system_instruction: Content::text(PERSONA),
            contents: vec![Content::text(topic)],
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

impl Content {
    fn text(text: &str) -> Self {
        Self { parts: vec![Part { text: Some(text.to_owned()) }] }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
}

impl GenerateResponse {
    /// Text of the first part of the first candidate, trimmed.
    fn into_text(self) -> Result<String, TipError> {
        let text = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .map(|t| t.trim().to_owned())
            .unwrap_or_default();
        if text.is_empty() { Err(TipError::Empty) } else { Ok(text) }
    }
}
