//! Core data types for the Panelsmith comic panel generator.
//!
//! This crate holds the immutable job description sent to the generation
//! service and the chunk type the service streams back.

mod aspect;
mod chunk;
mod job;
mod modality;
mod safety;
mod settings;

pub use aspect::AspectRatio;
pub use chunk::{ChunkPart, InlineImage, ResponseChunk};
pub use job::{DEFAULT_MODEL, IMAGE_EXTENSION, JobDefinition, JobDefinitionBuilder};
pub use modality::Modality;
pub use safety::{HarmBlockThreshold, HarmCategory, SafetySetting};
pub use settings::{GenerationSettings, SamplingConfig};
