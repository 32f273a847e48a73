/// Inference client: the single point of entry for all model calls.
///
/// ARCHITECTURAL RULE: no other module may talk to the text-generation
/// server directly. All model interactions MUST go through this module.
///
/// The collaborator is a TGI-compatible inference server hosting a
/// sequence-to-sequence model; it is a black box reached over HTTP.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod prompts;

/// Decoding parameters for one generation call. The two profiles below share
/// everything except the output budget.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GenerationProfile {
    pub max_new_tokens: u32,
    pub num_beams: u32,
    pub temperature: f32,
    pub no_repeat_ngram_size: u32,
    /// Input token budget. Longer prompts are truncated server-side; the
    /// head-vs-tail policy is the server default and is left untouched.
    pub truncate: u32,
}

/// Profile for per-section analysis calls.
pub const SECTION_PROFILE: GenerationProfile = GenerationProfile {
    max_new_tokens: 150,
    num_beams: 4,
    temperature: 0.7,
    no_repeat_ngram_size: 2,
    truncate: 512,
};

/// Profile for interactive chat calls. Same decoding family, longer output.
pub const CHAT_PROFILE: GenerationProfile = GenerationProfile {
    max_new_tokens: 200,
    num_beams: 4,
    temperature: 0.7,
    no_repeat_ngram_size: 2,
    truncate: 512,
};

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Inference server error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: GenerationProfile,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: String,
}

/// The seam between the analyzer and the model. Production code uses
/// `InferenceClient`; tests substitute a canned implementation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        profile: &GenerationProfile,
    ) -> Result<String, InferenceError>;
}

/// HTTP client for the inference server.
///
/// One synchronous-in-spirit call per request: no retries, no request
/// timeout, no cancellation. A slow or failed model call blocks or fails
/// the whole enclosing request.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    endpoint: String,
}

impl InferenceClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl TextGenerator for InferenceClient {
    async fn generate(
        &self,
        prompt: &str,
        profile: &GenerationProfile,
    ) -> Result<String, InferenceError> {
        let request_body = GenerateRequest {
            inputs: prompt,
            parameters: *profile,
        };

        let response = self
            .client
            .post(format!("{}/generate", self.endpoint))
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error)
                .unwrap_or(body);
            return Err(InferenceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let generated: GenerateResponse = response.json().await?;

        debug!(
            "generation succeeded: {} output chars",
            generated.generated_text.len()
        );

        Ok(strip_special_tokens(&generated.generated_text))
    }
}

/// Model-internal control tokens that can leak into decoded output.
const SPECIAL_TOKENS: [&str; 4] = ["<pad>", "</s>", "<s>", "<unk>"];

/// Removes control tokens from decoded model output and trims the result.
fn strip_special_tokens(text: &str) -> String {
    let mut out = text.to_string();
    for token in SPECIAL_TOKENS {
        out = out.replace(token, "");
    }
    out.trim().to_string()
}
