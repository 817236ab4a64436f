//! Streamed response chunks.

/// Binary image payload returned inline by the service.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct InlineImage {
    /// MIME type reported by the service, e.g. "image/png"
    mime_type: String,
    /// Raw image bytes, already decoded from the wire encoding
    data: Vec<u8>,
}

impl InlineImage {
    /// Creates an inline image.
    pub fn new(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }
}

/// One piece of a response chunk.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum ChunkPart {
    /// Narrative text
    Text(String),
    /// Inline image
    Image(InlineImage),
}

/// One unit of a streamed generation response.
///
/// A chunk may carry text, images, both, or nothing (a control chunk that
/// only reports e.g. a finish reason).
///
/// # Examples
///
/// ```
/// use panelsmith_core::{ChunkPart, InlineImage, ResponseChunk};
///
/// let chunk = ResponseChunk::new(vec![
///     ChunkPart::Text("Nubus ".to_string()),
///     ChunkPart::Text("descends.".to_string()),
///     ChunkPart::Image(InlineImage::new("image/png", b"\x89PNG".to_vec())),
/// ]);
///
/// assert_eq!(chunk.text().as_deref(), Some("Nubus descends."));
/// assert_eq!(chunk.images().count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, derive_getters::Getters)]
pub struct ResponseChunk {
    /// Parts in the order the service sent them
    parts: Vec<ChunkPart>,
    /// Why the service stopped, present on the final chunk
    finish_reason: Option<String>,
}

impl ResponseChunk {
    /// Creates a chunk from its parts.
    pub fn new(parts: Vec<ChunkPart>) -> Self {
        Self {
            parts,
            finish_reason: None,
        }
    }

    /// Attaches a finish reason.
    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }

    /// Chunk holding a single text part.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(vec![ChunkPart::Text(text.into())])
    }

    /// Chunk holding a single image part.
    pub fn image_only(mime_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self::new(vec![ChunkPart::Image(InlineImage::new(mime_type, data))])
    }

    /// Concatenated text of all text parts, or `None` when that is empty.
    pub fn text(&self) -> Option<String> {
        let text: String = self
            .parts
            .iter()
            .filter_map(|part| match part {
                ChunkPart::Text(text) => Some(text.as_str()),
                ChunkPart::Image(_) => None,
            })
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }

    /// Inline images in arrival order.
    pub fn images(&self) -> impl Iterator<Item = &InlineImage> {
        self.parts.iter().filter_map(|part| match part {
            ChunkPart::Image(image) => Some(image),
            ChunkPart::Text(_) => None,
        })
    }

    /// True when the chunk has no parts at all.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
