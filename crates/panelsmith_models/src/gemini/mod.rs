//! Google Gemini `streamGenerateContent` client.
//!
//! The REST endpoint answers with Server-Sent Events; each event carries one
//! `GenerateContentResponse`, which maps to one [`panelsmith_core::ResponseChunk`].

mod client;
mod conversions;
mod dto;
mod sse;

pub use client::{DEFAULT_BASE_URL, GEMINI_API_KEY_ENV, GeminiClient};
pub use conversions::{chunk_from_response, parse_stream_event, request_from_job};
pub use dto::{GenerateContentRequest, GenerateContentResponse};
pub use sse::SseDecoder;
