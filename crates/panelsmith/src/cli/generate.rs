//! Generate command handler.

use super::load_book;
use anyhow::{Context, bail};
use panelsmith_comic::{ConsoleNarrator, DispatchMode, FsImageStore, JobDispatcher};
use panelsmith_models::GeminiClient;
use std::path::PathBuf;
use tracing::{error, info, instrument};

/// Options for one `generate` invocation.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Panel book file, built-in intro comic when `None`
    pub book: Option<PathBuf>,
    /// Panels to run, all when empty
    pub panels: Vec<String>,
    /// Output directory, current directory when `None`
    pub output_dir: Option<PathBuf>,
    /// Model override
    pub model: Option<String>,
    /// Run jobs concurrently
    pub parallel: bool,
}

/// Handles the generate command.
///
/// Builds the Gemini client once, runs the selected panels, and fails if any
/// panel failed.
#[instrument(skip_all, fields(base_url = %base_url, parallel = options.parallel))]
pub async fn handle_generate_command(
    api_key: Option<String>,
    base_url: &str,
    options: GenerateOptions,
) -> anyhow::Result<()> {
    let mut book = load_book(options.book.as_deref())?;
    if let Some(model) = options.model {
        book = book.with_model(model);
    }

    let jobs = if options.panels.is_empty() {
        book.jobs()?
    } else {
        book.select(&options.panels)?
    };

    let client = GeminiClient::new(api_key.unwrap_or_default())
        .context("Set GEMINI_API_KEY or pass --api-key")?
        .with_base_url(base_url);

    let store = match options.output_dir {
        Some(dir) => FsImageStore::new(dir),
        None => FsImageStore::default(),
    };

    let mode = if options.parallel {
        DispatchMode::Concurrent
    } else {
        DispatchMode::Sequential
    };

    info!(panels = jobs.len(), model = %book.model(), ?mode, "Starting generation");

    let dispatcher = JobDispatcher::new(client, ConsoleNarrator::stdout(), store);
    let reports = dispatcher.run_all(&jobs, mode).await;

    let mut failed = 0;
    for report in &reports {
        match report.outcome() {
            Ok(summary) => info!(
                job = %report.name(),
                images = summary.images_written(),
                narration_lines = summary.narration_lines(),
                path = ?summary.last_path(),
                "Panel complete"
            ),
            Err(e) => {
                failed += 1;
                error!(
                    job = %report.name(),
                    partial = report.failed_mid_stream(),
                    error = %e,
                    "Panel failed"
                );
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} panels failed", failed, reports.len());
    }
    Ok(())
}
