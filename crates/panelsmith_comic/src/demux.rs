//! Routes streamed chunks to narration and image persistence.

use derive_getters::Getters;
use futures_util::StreamExt;
use panelsmith_core::JobDefinition;
use panelsmith_error::PanelsmithResult;
use panelsmith_interface::{ChunkStream, NarrationSink, PersistenceSink};
use std::path::PathBuf;
use tracing::{debug, instrument, trace};

/// What one demultiplexed stream produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct DemuxSummary {
    /// Chunks pulled from the stream, including empty ones
    chunks: usize,
    /// Voiceover records emitted
    narration_lines: usize,
    /// Image payloads written
    images_written: usize,
    /// Path of the most recent write
    last_path: Option<PathBuf>,
}

/// Consumes a chunk stream one chunk at a time.
///
/// Text in a chunk is narrated before any of its images are written. Nothing
/// is buffered between chunks, so every effect happens as soon as its chunk
/// arrives. The first error from the stream or a sink ends consumption and is
/// returned; effects already applied stay applied.
#[derive(Debug)]
pub struct Demultiplexer<'a, N, P> {
    narrator: &'a N,
    store: &'a P,
}

impl<'a, N, P> Demultiplexer<'a, N, P>
where
    N: NarrationSink,
    P: PersistenceSink,
{
    /// Creates a demultiplexer writing to the given sinks.
    pub fn new(narrator: &'a N, store: &'a P) -> Self {
        Self { narrator, store }
    }

    /// Drains `stream` for `job`.
    ///
    /// # Errors
    ///
    /// Returns the first stream item error, persistence error, or narration
    /// error encountered.
    #[instrument(skip(self, stream), fields(job = %job.name()))]
    pub async fn consume(
        &self,
        job: &JobDefinition,
        mut stream: ChunkStream,
    ) -> PanelsmithResult<DemuxSummary> {
        let mut summary = DemuxSummary::default();

        while let Some(item) = stream.next().await {
            let chunk = item?;
            summary.chunks += 1;

            if let Some(text) = chunk.text() {
                self.narrator.voiceover(&text)?;
                summary.narration_lines += 1;
            }

            for image in chunk.images() {
                let path = self.store.persist(job, image).await?;
                self.narrator.image_saved(&path)?;
                summary.images_written += 1;
                summary.last_path = Some(path);
            }

            if chunk.is_empty() {
                trace!(finish_reason = ?chunk.finish_reason(), "Control chunk");
            }
        }

        debug!(
            chunks = summary.chunks,
            narration_lines = summary.narration_lines,
            images_written = summary.images_written,
            "Stream drained"
        );
        Ok(summary)
    }
}
