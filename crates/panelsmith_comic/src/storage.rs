//! Filesystem image persistence.

use async_trait::async_trait;
use panelsmith_core::{InlineImage, JobDefinition};
use panelsmith_error::{PanelsmithResult, StorageError, StorageErrorKind};
use panelsmith_interface::PersistenceSink;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Writes each image to `{output_dir}/{job name}.png`.
///
/// Bytes are written exactly as received. An existing file is replaced, so a
/// job that yields several images leaves only the last one on disk.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    output_dir: PathBuf,
}

/// Current directory, reported as bare file names.
impl Default for FsImageStore {
    fn default() -> Self {
        Self::new(PathBuf::new())
    }
}

impl FsImageStore {
    /// Store rooted at `output_dir`. The directory is created on first write.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Where images for `job` end up.
    ///
    /// # Errors
    ///
    /// Fails when the job name would escape the output directory.
    pub fn path_for(&self, job: &JobDefinition) -> PanelsmithResult<PathBuf> {
        let name = job.name();
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(name.clone())).into());
        }
        Ok(self.output_dir.join(job.image_file_name()))
    }
}

#[async_trait]
impl PersistenceSink for FsImageStore {
    #[instrument(skip(self, job, image), fields(job = %job.name(), bytes = image.data().len()))]
    async fn persist(&self, job: &JobDefinition, image: &InlineImage) -> PanelsmithResult<PathBuf> {
        let path = self.path_for(job)?;

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::from_io(&self.output_dir, &e)))?;
        tokio::fs::write(&path, image.data())
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::from_io(&path, &e)))?;

        debug!(path = %path.display(), mime = %image.mime_type(), "Image written");
        Ok(path)
    }
}
