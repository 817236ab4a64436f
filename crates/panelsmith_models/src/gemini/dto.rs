//! Wire types for the Gemini `generateContent` family of endpoints.

use derive_builder::Builder;
use derive_getters::Getters;
use panelsmith_core::{AspectRatio, Modality, SafetySetting};
use serde::{Deserialize, Serialize};

/// A text part in a request turn.
#[derive(Debug, Clone, Serialize)]
pub struct RequestPart {
    /// Prompt text
    pub text: String,
}

/// One conversation turn.
#[derive(Debug, Clone, Serialize)]
pub struct RequestContent {
    /// Always "user" for panel prompts
    pub role: String,
    /// Turn parts
    pub parts: Vec<RequestPart>,
}

/// Image rendering options.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    /// Requested aspect ratio, e.g. "16:9"
    pub aspect_ratio: AspectRatio,
}

/// Sampling and output configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    pub temperature: f32,
    /// Nucleus sampling probability mass
    pub top_p: f32,
    /// Upper bound on generated tokens
    pub max_output_tokens: u32,
    /// Modalities the model may answer with
    pub response_modalities: Vec<Modality>,
    /// Image rendering options
    pub image_config: ImageConfig,
}

/// Body of a `streamGenerateContent` call.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Conversation turns
    contents: Vec<RequestContent>,
    /// Sampling and output configuration
    generation_config: GenerationConfig,
    /// Per-category safety thresholds
    safety_settings: Vec<SafetySetting>,
}

impl GenerateContentRequest {
    /// Creates a new builder for GenerateContentRequest.
    pub fn builder() -> GenerateContentRequestBuilder {
        GenerateContentRequestBuilder::default()
    }
}

/// Base64 payload with its MIME type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type, e.g. "image/png"
    pub mime_type: String,
    /// Standard base64 encoded bytes
    pub data: String,
}

/// One part of a candidate's content.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePart {
    /// Text, when this is a text part
    #[serde(default)]
    pub text: Option<String>,
    /// Inline binary data, when this is a media part
    #[serde(default)]
    pub inline_data: Option<InlineData>,
    /// Marks model reasoning rather than answer text
    #[serde(default)]
    pub thought: bool,
}

/// Content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    /// Parts in generation order
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A single candidate.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Candidate content, absent on some terminal events
    #[serde(default)]
    pub content: Option<CandidateContent>,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was rejected
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    /// Tokens generated so far
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    /// Total tokens
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

/// One streamed `GenerateContentResponse` event.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidates; the first one is used
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Prompt feedback
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    /// Token usage
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
    /// Model version that served the request
    #[serde(default)]
    pub model_version: Option<String>,
}
