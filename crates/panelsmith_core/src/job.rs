//! Job definitions: one generation call for one named panel.

use crate::{AspectRatio, GenerationSettings};

/// Model used when a job does not name one.
pub const DEFAULT_MODEL: &str = "gemini-3-pro-image-preview";

/// Extension given to every persisted image, whatever MIME type the service reports.
pub const IMAGE_EXTENSION: &str = "png";

/// Immutable description of one panel generation request.
///
/// The name doubles as the output file stem, so it must not be empty.
/// Nothing else is validated locally.
///
/// # Examples
///
/// ```
/// use panelsmith_core::{AspectRatio, JobDefinition};
///
/// let job = JobDefinition::builder()
///     .name("panel_5_the_uplink")
///     .prompt("Nubus lands, looking up.")
///     .aspect_ratio(AspectRatio::Square)
///     .build()
///     .unwrap();
///
/// assert_eq!(job.image_file_name(), "panel_5_the_uplink.png");
/// assert_eq!(job.model(), "gemini-3-pro-image-preview");
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters, derive_builder::Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct JobDefinition {
    /// Panel name, used as the output file stem
    name: String,
    /// Prompt text sent as the single user turn
    prompt: String,
    /// Model identifier
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Requested image aspect ratio
    #[builder(default)]
    aspect_ratio: AspectRatio,
    /// Sampling, modality and safety configuration
    #[builder(default)]
    settings: GenerationSettings,
}

impl JobDefinition {
    /// Returns a builder for constructing a JobDefinition.
    pub fn builder() -> JobDefinitionBuilder {
        JobDefinitionBuilder::default()
    }

    /// File name every image from this job is written to.
    pub fn image_file_name(&self) -> String {
        format!("{}.{}", self.name, IMAGE_EXTENSION)
    }
}

impl JobDefinitionBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.name {
            Some(name) if name.trim().is_empty() => Err("job name cannot be empty".to_string()),
            _ => Ok(()),
        }
    }
}
