//! Blocking REST client for the Generative Language API.
//!
//! Implements both capability traits so one client can back story
//! generation and embedding. Constructed explicitly — no global state —
//! and the base URL is overridable for tests and proxies.

use noir_core::errors::{EmbeddingError, NoirResult, StoryError};
use noir_core::traits::{EmbeddingProvider, GenerationRequest, TextGenerator};
use serde::{Deserialize, Serialize};
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Embedding dimensionality of the default embedding model.
const EMBEDDING_DIMENSIONS: usize = 768;

/// REST client for text generation and embedding.
pub struct GeminiClient {
    http: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
    generation_model: String,
    embedding_model: String,
}

impl GeminiClient {
    /// Build a client from an API key and model identifiers.
    pub fn new(api_key: impl Into<String>, generation_model: &str, embedding_model: &str) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            generation_model: generation_model.to_string(),
            embedding_model: embedding_model.to_string(),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn post<B: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, reqwest::Error> {
        let url = format!("{}/{}?key={}", self.base_url, path, self.api_key);
        self.http
            .post(url)
            .json(body)
            .send()?
            .error_for_status()?
            .json()
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBody {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    generation_config: GenerateBodyConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

impl Content {
    fn from_text(text: &str) -> Self {
        Self {
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateBodyConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Serialize)]
struct EmbedBody {
    content: EmbedContent,
}

#[derive(Debug, Serialize)]
struct EmbedContent {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct EmbedResponse {
    embedding: EmbeddingValues,
}

#[derive(Debug, Deserialize)]
struct EmbeddingValues {
    values: Vec<f32>,
}

impl TextGenerator for GeminiClient {
    fn generate(&self, request: &GenerationRequest) -> NoirResult<String> {
        let body = GenerateBody {
            contents: vec![Content::from_text(&request.prompt)],
            system_instruction: request
                .system_instruction
                .as_deref()
                .map(Content::from_text),
            generation_config: GenerateBodyConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            },
        };

        let path = format!("models/{}:generateContent", self.generation_model);
        debug!(model = %self.generation_model, "sending generation request");
        let response: GenerateResponse =
            self.post(&path, &body)
                .map_err(|e| StoryError::GenerationFailed {
                    reason: e.to_string(),
                })?;

        let text = response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| StoryError::MalformedResponse {
                reason: "no candidates in generation response".to_string(),
            })?;
        Ok(text)
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl EmbeddingProvider for GeminiClient {
    fn embed(&self, text: &str) -> NoirResult<Vec<f32>> {
        let body = EmbedBody {
            content: EmbedContent {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            },
        };

        let path = format!("models/{}:embedContent", self.embedding_model);
        let response: EmbedResponse =
            self.post(&path, &body)
                .map_err(|e| EmbeddingError::EmbedFailed {
                    reason: e.to_string(),
                })?;
        Ok(response.embedding.values)
    }

    fn dimensions(&self) -> usize {
        EMBEDDING_DIMENSIONS
    }

    fn name(&self) -> &str {
        "gemini-rest"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }
}
