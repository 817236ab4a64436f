//! Trait definitions for the Panelsmith comic panel generator.
//!
//! The demultiplexer and dispatcher only ever talk to these traits, so the
//! real Gemini client and filesystem can be swapped for scripted fakes.

mod client;
mod sink;

pub use client::{ChunkStream, GenerationClient};
pub use sink::{NarrationSink, PersistenceSink};
