//! Sampling, modality and safety configuration shared by every panel.

use crate::{Modality, SafetySetting};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Sampling parameters forwarded verbatim to the service.
///
/// Ranges are not checked here; the service rejects out-of-range values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct SamplingConfig {
    /// Sampling temperature
    temperature: f32,
    /// Nucleus sampling probability mass
    top_p: f32,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
}

impl SamplingConfig {
    /// Creates a sampling configuration.
    pub fn new(temperature: f32, top_p: f32, max_output_tokens: u32) -> Self {
        Self {
            temperature,
            top_p,
            max_output_tokens,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self::new(1.0, 0.95, 32768)
    }
}

/// Everything about a request except the prompt, aspect ratio and model.
///
/// # Examples
///
/// ```
/// use panelsmith_core::{GenerationSettings, Modality};
///
/// let settings = GenerationSettings::default();
/// assert!(settings.response_modalities().contains(&Modality::Image));
/// assert_eq!(settings.safety().len(), 4);
/// assert_eq!(*settings.sampling().max_output_tokens(), 32768);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct GenerationSettings {
    /// Sampling parameters
    #[serde(flatten)]
    sampling: SamplingConfig,
    /// Modalities the service may answer with
    response_modalities: BTreeSet<Modality>,
    /// Per-category safety thresholds
    safety: Vec<SafetySetting>,
}

impl GenerationSettings {
    /// Creates settings from explicit parts.
    pub fn new(
        sampling: SamplingConfig,
        response_modalities: BTreeSet<Modality>,
        safety: Vec<SafetySetting>,
    ) -> Self {
        Self {
            sampling,
            response_modalities,
            safety,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            sampling: SamplingConfig::default(),
            response_modalities: [Modality::Text, Modality::Image].into_iter().collect(),
            safety: SafetySetting::all_off(),
        }
    }
}
