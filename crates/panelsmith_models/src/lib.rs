//! Generation service clients for Panelsmith.
//!
//! Each provider lives in its own module and implements
//! [`panelsmith_interface::GenerationClient`].

mod gemini;

pub use gemini::{
    DEFAULT_BASE_URL, GEMINI_API_KEY_ENV, GeminiClient, GenerateContentRequest,
    GenerateContentResponse, SseDecoder, chunk_from_response, parse_stream_event,
    request_from_job,
};
