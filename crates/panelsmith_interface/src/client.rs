//! Generation service client trait.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use panelsmith_core::{JobDefinition, ResponseChunk};
use panelsmith_error::PanelsmithResult;
use std::sync::Arc;

/// Lazily produced, ordered sequence of response chunks for one job.
///
/// An `Err` item ends the job; consumers stop polling after it.
pub type ChunkStream = BoxStream<'static, PanelsmithResult<ResponseChunk>>;

/// A service that turns a job definition into a chunk stream.
///
/// Credentials and transport are the implementor's business. Setup failures
/// (bad key, rejected request) come back from `stream_generate`; failures
/// after the first byte arrive as stream items.
#[async_trait]
pub trait GenerationClient: Send + Sync {
    /// Open a streaming generation call for `job`.
    async fn stream_generate(&self, job: &JobDefinition) -> PanelsmithResult<ChunkStream>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}

#[async_trait]
impl<T: GenerationClient + ?Sized> GenerationClient for Arc<T> {
    async fn stream_generate(&self, job: &JobDefinition) -> PanelsmithResult<ChunkStream> {
        (**self).stream_generate(job).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
