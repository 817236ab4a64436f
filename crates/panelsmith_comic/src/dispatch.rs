//! Running jobs against an injected client and sinks.

use crate::{DemuxSummary, Demultiplexer};
use derive_getters::Getters;
use futures_util::future::join_all;
use panelsmith_core::JobDefinition;
use panelsmith_error::{PanelsmithErrorKind, PanelsmithResult};
use panelsmith_interface::{GenerationClient, NarrationSink, PersistenceSink};
use tracing::{error, info, instrument};

/// How `run_all` schedules a list of jobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DispatchMode {
    /// One job at a time, in list order
    #[default]
    Sequential,
    /// Every job polled together on the current task
    Concurrent,
}

/// Outcome of one job in a batch.
#[derive(Debug, Getters)]
pub struct JobReport {
    /// Job name
    name: String,
    /// Summary on success, the error that ended the job otherwise
    outcome: PanelsmithResult<DemuxSummary>,
}

impl JobReport {
    /// True when the job ran to the end of its stream.
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }

    /// True when the service failed after the stream had opened, so some
    /// output may already have been narrated or written.
    pub fn failed_mid_stream(&self) -> bool {
        match &self.outcome {
            Err(e) => matches!(
                e.kind(),
                PanelsmithErrorKind::Gemini(g) if g.kind.is_mid_stream()
            ),
            Ok(_) => false,
        }
    }
}

/// Owns the collaborators a job needs and runs jobs with them.
///
/// Nothing is global: the client is built by the caller (typically once in
/// `main`) and every job borrows it.
#[derive(Debug)]
pub struct JobDispatcher<C, N, P> {
    client: C,
    narrator: N,
    store: P,
}

impl<C, N, P> JobDispatcher<C, N, P>
where
    C: GenerationClient,
    N: NarrationSink,
    P: PersistenceSink,
{
    /// Creates a dispatcher from its collaborators.
    pub fn new(client: C, narrator: N, store: P) -> Self {
        Self {
            client,
            narrator,
            store,
        }
    }

    /// The generation client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The narration sink.
    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// Runs one job: banner, stream, demultiplex.
    ///
    /// # Errors
    ///
    /// Returns the first error from the client, the stream, or either sink.
    #[instrument(skip(self, job), fields(job = %job.name(), provider = self.client.provider_name()))]
    pub async fn run(&self, job: &JobDefinition) -> PanelsmithResult<DemuxSummary> {
        self.narrator.job_started(job.name())?;

        let stream = self.client.stream_generate(job).await?;
        let summary = Demultiplexer::new(&self.narrator, &self.store)
            .consume(job, stream)
            .await?;

        info!(
            images_written = summary.images_written(),
            narration_lines = summary.narration_lines(),
            "Job finished"
        );
        Ok(summary)
    }

    /// Runs every job and reports each outcome, in input order.
    ///
    /// A failing job never stops the others.
    #[instrument(skip(self, jobs), fields(count = jobs.len()))]
    pub async fn run_all(&self, jobs: &[JobDefinition], mode: DispatchMode) -> Vec<JobReport> {
        let reports = match mode {
            DispatchMode::Sequential => {
                let mut reports = Vec::with_capacity(jobs.len());
                for job in jobs {
                    reports.push(self.report(job).await);
                }
                reports
            }
            DispatchMode::Concurrent => join_all(jobs.iter().map(|job| self.report(job))).await,
        };

        let failed = reports.iter().filter(|r| !r.succeeded()).count();
        info!(succeeded = reports.len() - failed, failed, "Batch finished");
        reports
    }

    async fn report(&self, job: &JobDefinition) -> JobReport {
        let report = JobReport {
            name: job.name().clone(),
            outcome: self.run(job).await,
        };
        if let Err(e) = &report.outcome {
            error!(
                job = %report.name,
                mid_stream = report.failed_mid_stream(),
                error = %e,
                "Job failed"
            );
        }
        report
    }
}
