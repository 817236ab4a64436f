//! Operator console output.

use panelsmith_error::{NarrationError, PanelsmithResult};
use panelsmith_interface::NarrationSink;
use std::io::{Stdout, Write};
use std::path::Path;
use std::sync::Mutex;

/// Writes narration records as lines to any writer.
///
/// Each record is written and flushed under one lock, so records from
/// concurrently running jobs never interleave mid-line.
///
/// # Examples
///
/// ```
/// use panelsmith_comic::ConsoleNarrator;
/// use panelsmith_interface::NarrationSink;
///
/// let narrator = ConsoleNarrator::new(Vec::new());
/// narrator.job_started("panel_5_the_uplink").unwrap();
/// narrator.voiceover("A beam of light.").unwrap();
///
/// let out = String::from_utf8(narrator.into_inner().unwrap()).unwrap();
/// assert_eq!(
///     out,
///     "--- Generating panel_5_the_uplink ---\n\n[NARRATIVE VOICEOVER]: A beam of light.\n"
/// );
/// ```
#[derive(Debug)]
pub struct ConsoleNarrator<W> {
    writer: Mutex<W>,
}

impl ConsoleNarrator<Stdout> {
    /// Narrator writing to standard output.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleNarrator<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the writer.
    pub fn into_inner(self) -> PanelsmithResult<W> {
        self.writer
            .into_inner()
            .map_err(|_| NarrationError::new("Narrator lock poisoned").into())
    }

    fn emit(&self, record: &str) -> PanelsmithResult<()> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| NarrationError::new("Narrator lock poisoned"))?;
        writer
            .write_all(record.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| NarrationError::new(e.to_string()))?;
        Ok(())
    }
}

impl<W: Write + Send> NarrationSink for ConsoleNarrator<W> {
    fn job_started(&self, job_name: &str) -> PanelsmithResult<()> {
        self.emit(&format!("--- Generating {} ---\n", job_name))
    }

    fn voiceover(&self, text: &str) -> PanelsmithResult<()> {
        self.emit(&format!("\n[NARRATIVE VOICEOVER]: {}\n", text))
    }

    fn image_saved(&self, path: &Path) -> PanelsmithResult<()> {
        self.emit(&format!("\n[SUCCESS] Image saved to: {}\n", path.display()))
    }
}
