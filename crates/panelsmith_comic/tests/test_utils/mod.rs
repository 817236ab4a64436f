//! Test utilities for panel generation tests.
//!
//! Provides a scripted generation client and a narrator that records every
//! record it receives.

#![allow(dead_code)]

use async_trait::async_trait;
use panelsmith_core::{AspectRatio, JobDefinition, ResponseChunk};
use panelsmith_error::{GeminiError, GeminiErrorKind, PanelsmithError, PanelsmithResult};
use panelsmith_interface::{ChunkStream, GenerationClient, NarrationSink};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// One scripted stream item.
#[derive(Debug, Clone)]
pub enum Step {
    Chunk(ResponseChunk),
    Fail(GeminiErrorKind),
}

/// Shorthand for a text chunk step.
pub fn text(s: &str) -> Step {
    Step::Chunk(ResponseChunk::text_only(s))
}

/// Shorthand for a PNG image chunk step.
pub fn image(bytes: &[u8]) -> Step {
    Step::Chunk(ResponseChunk::image_only("image/png", bytes.to_vec()))
}

/// Shorthand for a mid-stream transport failure.
pub fn interrupted() -> Step {
    Step::Fail(GeminiErrorKind::StreamInterrupted("connection reset".to_string()))
}

/// Client that replays a fixed chunk script per job name.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    scripts: HashMap<String, Vec<Step>>,
    refusals: HashMap<String, GeminiErrorKind>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Streams `steps` whenever `job` is requested.
    pub fn script(mut self, job: &str, steps: Vec<Step>) -> Self {
        self.scripts.insert(job.to_string(), steps);
        self
    }

    /// Fails `stream_generate` for `job` before any chunk.
    pub fn refuse(mut self, job: &str, kind: GeminiErrorKind) -> Self {
        self.refusals.insert(job.to_string(), kind);
        self
    }

    /// Job names requested so far.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("Calls lock").clone()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    async fn stream_generate(&self, job: &JobDefinition) -> PanelsmithResult<ChunkStream> {
        self.calls.lock().expect("Calls lock").push(job.name().clone());

        if let Some(kind) = self.refusals.get(job.name()) {
            return Err(GeminiError::new(kind.clone()).into());
        }

        let items: Vec<PanelsmithResult<ResponseChunk>> = self
            .scripts
            .get(job.name())
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .map(|step| match step {
                Step::Chunk(chunk) => Ok(chunk),
                Step::Fail(kind) => Err(PanelsmithError::from(GeminiError::new(kind))),
            })
            .collect();

        Ok(Box::pin(futures_util::stream::iter(items)))
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }
}

/// A narration record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Started(String),
    Voiceover(String),
    Saved(PathBuf),
}

/// Narrator that keeps every record in arrival order.
#[derive(Debug, Default)]
pub struct RecordingNarrator {
    events: Mutex<Vec<Event>>,
}

impl RecordingNarrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("Events lock").clone()
    }

    fn record(&self, event: Event) -> PanelsmithResult<()> {
        self.events.lock().expect("Events lock").push(event);
        Ok(())
    }
}

impl NarrationSink for RecordingNarrator {
    fn job_started(&self, job_name: &str) -> PanelsmithResult<()> {
        self.record(Event::Started(job_name.to_string()))
    }

    fn voiceover(&self, text: &str) -> PanelsmithResult<()> {
        self.record(Event::Voiceover(text.to_string()))
    }

    fn image_saved(&self, path: &Path) -> PanelsmithResult<()> {
        self.record(Event::Saved(path.to_path_buf()))
    }
}

/// Builds a job with default settings.
pub fn job(name: &str) -> JobDefinition {
    JobDefinition::builder()
        .name(name)
        .prompt(format!("Prompt for {}", name))
        .aspect_ratio(AspectRatio::Square)
        .build()
        .expect("Valid test job")
}
