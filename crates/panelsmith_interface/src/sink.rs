//! Destinations for demultiplexed chunk content.

use async_trait::async_trait;
use panelsmith_core::{InlineImage, JobDefinition};
use panelsmith_error::PanelsmithResult;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Human-readable progress records for the operator.
///
/// Each call emits exactly one record. Implementations must not buffer or
/// merge records across calls.
pub trait NarrationSink: Send + Sync {
    /// A job is starting.
    fn job_started(&self, job_name: &str) -> PanelsmithResult<()>;

    /// The service produced narrative text.
    fn voiceover(&self, text: &str) -> PanelsmithResult<()>;

    /// An image was written to `path`.
    fn image_saved(&self, path: &Path) -> PanelsmithResult<()>;
}

/// Where image payloads end up.
#[async_trait]
pub trait PersistenceSink: Send + Sync {
    /// Write `image` for `job`, replacing anything already there.
    ///
    /// Returns the path written.
    async fn persist(&self, job: &JobDefinition, image: &InlineImage) -> PanelsmithResult<PathBuf>;
}

impl<T: NarrationSink + ?Sized> NarrationSink for Arc<T> {
    fn job_started(&self, job_name: &str) -> PanelsmithResult<()> {
        (**self).job_started(job_name)
    }

    fn voiceover(&self, text: &str) -> PanelsmithResult<()> {
        (**self).voiceover(text)
    }

    fn image_saved(&self, path: &Path) -> PanelsmithResult<()> {
        (**self).image_saved(path)
    }
}

#[async_trait]
impl<T: PersistenceSink + ?Sized> PersistenceSink for Arc<T> {
    async fn persist(&self, job: &JobDefinition, image: &InlineImage) -> PanelsmithResult<PathBuf> {
        (**self).persist(job, image).await
    }
}
