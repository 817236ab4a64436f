//! Streaming client for the Gemini REST API.

use crate::gemini::{SseDecoder, conversions};
use async_trait::async_trait;
use futures_util::StreamExt;
use panelsmith_core::JobDefinition;
use panelsmith_error::{GeminiError, GeminiErrorKind, PanelsmithError, PanelsmithResult};
use panelsmith_interface::{ChunkStream, GenerationClient};
use reqwest::Client;
use tracing::{debug, error, info, instrument, warn};

/// Environment variable holding the API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Public Gemini API root.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for `models/{model}:streamGenerateContent`.
///
/// Construct it once and share it; every job opens its own stream.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GeminiClient {
    /// Creates a client for the public Gemini endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is empty or the HTTP client cannot be built.
    #[instrument(skip(api_key))]
    pub fn new(api_key: impl Into<String>) -> PanelsmithResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        let client = Client::builder()
            .user_agent(concat!("panelsmith/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        debug!(url = DEFAULT_BASE_URL, "Created Gemini client");

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Creates a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> PanelsmithResult<Self> {
        let api_key = std::env::var(GEMINI_API_KEY_ENV)
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;
        Self::new(api_key)
    }

    /// Points the client at a different API root (proxies, local fakes).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Streaming endpoint for `model`.
    pub fn stream_url(&self, model: &str) -> String {
        format!(
            "{}/models/{}:streamGenerateContent?alt=sse",
            self.base_url, model
        )
    }
}

#[async_trait]
impl GenerationClient for GeminiClient {
    #[instrument(skip(self, job), fields(job = %job.name(), model = %job.model()))]
    async fn stream_generate(&self, job: &JobDefinition) -> PanelsmithResult<ChunkStream> {
        let body = conversions::request_from_job(job)?;
        let url = self.stream_url(job.model());

        debug!(
            aspect_ratio = %job.aspect_ratio(),
            prompt_chars = job.prompt().len(),
            "Sending streaming request"
        );

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = error_body(response.text().await);
            error!(status = %status, error = %message, "API error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        info!(status = %status, "Stream opened");

        let job_name = job.name().clone();
        let mut bytes = Box::pin(response.bytes_stream());
        let stream = async_stream::stream! {
            let mut decoder = SseDecoder::new();
            let mut events = 0usize;

            while let Some(read) = bytes.next().await {
                let read = match read {
                    Ok(read) => read,
                    Err(e) => {
                        warn!(job = %job_name, events, error = ?e, "Stream interrupted");
                        yield Err(PanelsmithError::from(GeminiError::new(
                            GeminiErrorKind::StreamInterrupted(e.to_string()),
                        )));
                        return;
                    }
                };

                for payload in decoder.push(&read) {
                    events += 1;
                    let chunk = conversions::parse_stream_event(&payload);
                    let failed = chunk.is_err();
                    yield chunk;
                    if failed {
                        return;
                    }
                }
            }

            if let Some(payload) = decoder.finish() {
                events += 1;
                yield conversions::parse_stream_event(&payload);
            }

            debug!(job = %job_name, events, "Stream finished");
        };

        Ok(Box::pin(stream))
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}

fn error_body<E: std::fmt::Display>(read: Result<String, E>) -> String {
    read.unwrap_or_else(|e| format!("<unreadable body: {}>", e))
}
