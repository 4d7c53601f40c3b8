use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::GenerationService;
use crate::domain::{DomainError, ImageAttachment};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const API_VERSION_PATH: &str = "/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-pro";
pub const DEFAULT_VISION_MODEL: &str = "gemini-pro-vision";

/// Connection settings for the Generative Language API.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub text_model: String,
    pub vision_model: String,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    pub fn with_vision_model(mut self, model: impl Into<String>) -> Self {
        self.vision_model = model.into();
        self
    }

    /// Read configuration from the environment:
    ///
    /// | Variable              | Default                                     |
    /// |-----------------------|---------------------------------------------|
    /// | `GOOGLE_API_KEY`      | required                                    |
    /// | `GEMINI_BASE_URL`     | `https://generativelanguage.googleapis.com` |
    /// | `GEMINI_TEXT_MODEL`   | `gemini-pro`                                |
    /// | `GEMINI_VISION_MODEL` | `gemini-pro-vision`                         |
    pub fn from_env() -> Result<Self, DomainError> {
        let mut config = Self::from_api_key(std::env::var("GOOGLE_API_KEY").ok())?;
        if let Ok(base) = std::env::var("GEMINI_BASE_URL") {
            config = config.with_base_url(base);
        }
        if let Ok(model) = std::env::var("GEMINI_TEXT_MODEL") {
            config = config.with_text_model(model);
        }
        if let Ok(model) = std::env::var("GEMINI_VISION_MODEL") {
            config = config.with_vision_model(model);
        }
        Ok(config)
    }

    /// Default configuration for `api_key`; a missing or blank key is a
    /// configuration error.
    pub fn from_api_key(api_key: Option<String>) -> Result<Self, DomainError> {
        api_key
            .filter(|key| !key.trim().is_empty())
            .map(Self::new)
            .ok_or_else(|| {
                DomainError::configuration(
                    "No Google API key found. Set GOOGLE_API_KEY in the environment or .env file.",
                )
            })
    }
}

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum RequestPart<'a> {
    Text {
        text: &'a str,
    },
    #[serde(rename_all = "camelCase")]
    InlineData {
        inline_data: InlineData<'a>,
    },
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InlineData<'a> {
    mime_type: &'a str,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// [`GenerationService`] backed by the Gemini `generateContent` REST endpoint.
///
/// Text prompts go to the text model; prompts with an image go to the vision
/// model with the image inlined as base64. No retries and no request timeout.
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    text_url: String,
    vision_url: String,
    text_model: String,
    vision_model: String,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        let base = config.base_url.trim_end_matches('/');
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key,
            text_url: endpoint(base, &config.text_model),
            vision_url: endpoint(base, &config.vision_model),
            text_model: config.text_model,
            vision_model: config.vision_model,
        }
    }

    pub fn from_env() -> Result<Self, DomainError> {
        GeminiConfig::from_env().map(Self::new)
    }

    async fn generate(&self, url: &str, parts: Vec<RequestPart<'_>>) -> Result<String, DomainError> {
        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    DomainError::internal(format!("GeminiClient: could not build request: {e}"))
                } else {
                    DomainError::generation(format!("GeminiClient: request failed: {e}"))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("GeminiClient: API returned {status}: {body}");
            return Err(DomainError::generation(format!(
                "GeminiClient: API returned {status}"
            )));
        }

        let api_response: GenerateContentResponse = response.json().await.map_err(|e| {
            DomainError::generation(format!("GeminiClient: failed to parse response: {e}"))
        })?;

        extract_text(api_response)
    }
}

#[async_trait]
impl GenerationService for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, DomainError> {
        debug!(
            "GeminiClient: text prompt of {} chars to {}",
            prompt.len(),
            self.text_model
        );
        self.generate(&self.text_url, vec![RequestPart::Text { text: prompt }])
            .await
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String, DomainError> {
        debug!(
            "GeminiClient: image prompt of {} chars with {} bytes of {} to {}",
            prompt.len(),
            image.byte_len(),
            image.mime_type(),
            self.vision_model
        );
        let parts = vec![
            RequestPart::Text { text: prompt },
            RequestPart::InlineData {
                inline_data: InlineData {
                    mime_type: image.mime_type(),
                    data: BASE64.encode(image.bytes()),
                },
            },
        ];
        self.generate(&self.vision_url, parts).await
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

fn endpoint(base: &str, model: &str) -> String {
    let model = model.trim();
    let model_path = if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    };
    format!("{base}{API_VERSION_PATH}/{model_path}:generateContent")
}

/// Join the text parts of the first candidate. A blocked or empty candidate
/// is a generation error.
fn extract_text(response: GenerateContentResponse) -> Result<String, DomainError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::generation("GeminiClient: response has no candidates"))?;

    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(DomainError::generation(format!(
            "GeminiClient: candidate has no text (finish reason: {reason})"
        )));
    }

    Ok(text)
}
