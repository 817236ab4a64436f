//! Type conversions between Panelsmith and Gemini formats.

use crate::gemini::dto::{
    GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
    RequestContent, RequestPart,
};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use panelsmith_core::{ChunkPart, InlineImage, JobDefinition, ResponseChunk};
use panelsmith_error::{
    ConfigError, ConfigErrorKind, GeminiError, GeminiErrorKind, PanelsmithResult,
};
use tracing::{debug, trace};

/// Converts a job definition into a `streamGenerateContent` request body.
pub fn request_from_job(job: &JobDefinition) -> PanelsmithResult<GenerateContentRequest> {
    let settings = job.settings();
    let sampling = settings.sampling();

    let generation_config = GenerationConfig {
        temperature: *sampling.temperature(),
        top_p: *sampling.top_p(),
        max_output_tokens: *sampling.max_output_tokens(),
        response_modalities: settings.response_modalities().iter().copied().collect(),
        image_config: ImageConfig {
            aspect_ratio: *job.aspect_ratio(),
        },
    };

    let contents = vec![RequestContent {
        role: "user".to_string(),
        parts: vec![RequestPart {
            text: job.prompt().clone(),
        }],
    }];

    GenerateContentRequest::builder()
        .contents(contents)
        .generation_config(generation_config)
        .safety_settings(settings.safety().clone())
        .build()
        .map_err(|e| ConfigError::new(ConfigErrorKind::InvalidJob(e.to_string())).into())
}

/// Converts one streamed response into a chunk.
///
/// Only the first candidate is read. Thought parts are not narrated.
pub fn chunk_from_response(response: GenerateContentResponse) -> PanelsmithResult<ResponseChunk> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.clone())
    {
        return Err(GeminiError::new(GeminiErrorKind::PromptBlocked(reason)).into());
    }

    if let Some(usage) = &response.usage_metadata {
        debug!(
            model_version = response.model_version.as_deref().unwrap_or("unknown"),
            prompt_tokens = usage.prompt_token_count,
            candidates_tokens = usage.candidates_token_count,
            total_tokens = usage.total_token_count,
            "Token usage"
        );
    }

    let Some(candidate) = response.candidates.into_iter().next() else {
        trace!("Event without candidates");
        return Ok(ResponseChunk::default());
    };

    let mut parts = Vec::new();
    for part in candidate.content.map(|c| c.parts).unwrap_or_default() {
        match part.text {
            Some(text) if !part.thought => parts.push(ChunkPart::Text(text)),
            Some(_) => trace!("Skipping thought part"),
            None => {}
        }

        if let Some(inline) = part.inline_data {
            let data = STANDARD
                .decode(inline.data.as_bytes())
                .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;
            debug!(mime = %inline.mime_type, bytes = data.len(), "Decoded inline data");
            parts.push(ChunkPart::Image(InlineImage::new(inline.mime_type, data)));
        }
    }

    let chunk = ResponseChunk::new(parts);
    Ok(match candidate.finish_reason {
        Some(reason) => chunk.with_finish_reason(reason),
        None => chunk,
    })
}

/// Parses the `data:` payload of one SSE event into a chunk.
pub fn parse_stream_event(payload: &str) -> PanelsmithResult<ResponseChunk> {
    let response: GenerateContentResponse = serde_json::from_str(payload).map_err(|e| {
        GeminiError::new(GeminiErrorKind::InvalidServerMessage(format!(
            "{}: {}",
            e,
            truncate(payload, 200)
        )))
    })?;
    chunk_from_response(response)
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
