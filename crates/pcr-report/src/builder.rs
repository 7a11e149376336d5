//! The report pipeline.

use std::io::Write;

use pcr_client::{ClientError, ProlificClient};
use pcr_core::{Project, ReportRow, StudyStatus, StudySummary};

use crate::error::ReportError;
use crate::outcome::{FetchStage, RunSummary, StudyFailure, StudyOutcome};
use crate::writer::ReportWriter;

/// Hooks for reporting progress while a run is underway.
pub trait ReportProgress {
    /// The listing finished with `count` studies.
    fn listed(&mut self, _count: usize) {}

    /// One study has been written or skipped.
    fn study_done(&mut self, _outcome: &StudyOutcome) {}
}

impl ReportProgress for () {}

/// Sequential report builder over a single [`ProlificClient`].
pub struct ReportBuilder<'a> {
    client: &'a ProlificClient,
    statuses: Vec<StudyStatus>,
}

impl<'a> ReportBuilder<'a> {
    #[must_use]
    pub fn new(client: &'a ProlificClient, statuses: &[StudyStatus]) -> Self {
        Self {
            client,
            statuses: statuses.to_vec(),
        }
    }

    /// Run the whole pipeline.
    ///
    /// `open` is called once the project is resolved and the listing has
    /// succeeded, so a fatal failure never creates an output. It returns the
    /// writer, which has already emitted the header. The flushed sink is
    /// handed back with the summary.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Project`] or [`ReportError::Listing`] when the
    /// run cannot start, and [`ReportError::Csv`]/[`ReportError::Io`] if the
    /// output itself fails. Per-study fetch failures are not errors.
    pub async fn run<W, F, P>(
        &self,
        project_id: &str,
        open: F,
        progress: &mut P,
    ) -> Result<(RunSummary, W), ReportError>
    where
        W: Write,
        F: FnOnce(&Project) -> Result<ReportWriter<W>, ReportError>,
        P: ReportProgress + ?Sized,
    {
        let project = self.resolve_project(project_id).await?;
        tracing::info!(project_id = %project.id, project = %project.name, "fetching studies");

        let studies = self.list_studies(&project).await?;
        progress.listed(studies.len());

        let mut writer = open(&project)?;
        let summary = self
            .write_report(project, &studies, &mut writer, progress)
            .await?;
        let sink = writer.into_inner()?;
        Ok((summary, sink))
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Project`] if the project cannot be fetched.
    pub async fn resolve_project(&self, project_id: &str) -> Result<Project, ReportError> {
        self.client
            .fetch_project(project_id)
            .await
            .map_err(|source| ReportError::Project {
                project_id: project_id.to_string(),
                source,
            })
    }

    /// # Errors
    ///
    /// Returns [`ReportError::Listing`] if any listing page fails.
    pub async fn list_studies(&self, project: &Project) -> Result<Vec<StudySummary>, ReportError> {
        self.client
            .list_studies(&project.id, &self.statuses)
            .await
            .map_err(|source| ReportError::Listing {
                project_id: project.id.clone(),
                source,
            })
    }

    /// Process `studies` in order, writing a row for each one whose detail
    /// and cost both load.
    ///
    /// # Errors
    ///
    /// Only sink failures are returned; fetch failures are recorded in the
    /// summary.
    pub async fn write_report<W, P>(
        &self,
        project: Project,
        studies: &[StudySummary],
        writer: &mut ReportWriter<W>,
        progress: &mut P,
    ) -> Result<RunSummary, ReportError>
    where
        W: Write,
        P: ReportProgress + ?Sized,
    {
        let mut summary = RunSummary::new(project, studies.len());

        for study in studies {
            let outcome = self.process_study(study).await;
            match &outcome {
                StudyOutcome::Written(row) => {
                    writer.write_row(row)?;
                    tracing::info!(
                        study_id = %study.id,
                        internal_name = %study.internal_name,
                        "study row written"
                    );
                }
                StudyOutcome::Failed(failure) => {
                    tracing::warn!(
                        study_id = %failure.study_id,
                        internal_name = %failure.internal_name,
                        stage = %failure.stage,
                        reason = %failure.reason,
                        "skipping study"
                    );
                }
            }
            summary.record(&outcome);
            progress.study_done(&outcome);
        }

        tracing::info!(
            rows = summary.rows_written,
            listed = summary.studies_listed,
            failed = summary.failures.len(),
            "report complete"
        );
        Ok(summary)
    }

    /// Fetch detail and cost for one study and derive its row.
    pub async fn process_study(&self, study: &StudySummary) -> StudyOutcome {
        let detail = match self.client.fetch_study_detail(&study.id).await {
            Ok(detail) => detail,
            Err(error) => return failed(study, FetchStage::Detail, &error),
        };
        let cost = match self.client.fetch_study_cost(&study.id).await {
            Ok(cost) => cost,
            Err(error) => return failed(study, FetchStage::Cost, &error),
        };
        StudyOutcome::Written(ReportRow::derive(study, &detail, &cost))
    }
}

fn failed(study: &StudySummary, stage: FetchStage, error: &ClientError) -> StudyOutcome {
    StudyOutcome::Failed(StudyFailure {
        study_id: study.id.clone(),
        internal_name: study.internal_name.clone(),
        stage,
        reason: error.to_string(),
    })
}
