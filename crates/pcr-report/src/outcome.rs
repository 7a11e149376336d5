//! Per-study results and the run summary.

use pcr_core::{Project, ReportRow};
use serde::Serialize;
use std::fmt;

/// Which per-study request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStage {
    Detail,
    Cost,
}

impl fmt::Display for FetchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Detail => "study details",
            Self::Cost => "study cost",
        })
    }
}

/// A study that was skipped, with enough context to find it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudyFailure {
    pub study_id: String,
    pub internal_name: String,
    pub stage: FetchStage,
    pub reason: String,
}

impl fmt::Display for StudyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.internal_name.is_empty() {
            write!(f, "{}: unable to retrieve {}: {}", self.study_id, self.stage, self.reason)
        } else {
            write!(
                f,
                "{} ({}): unable to retrieve {}: {}",
                self.internal_name, self.study_id, self.stage, self.reason
            )
        }
    }
}

/// Result of processing one study.
#[derive(Debug, Clone, PartialEq)]
pub enum StudyOutcome {
    Written(ReportRow),
    Failed(StudyFailure),
}

impl StudyOutcome {
    #[must_use]
    pub fn study_id(&self) -> &str {
        match self {
            Self::Written(row) => &row.study_id,
            Self::Failed(failure) => &failure.study_id,
        }
    }
}

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub project: Project,
    pub studies_listed: usize,
    pub rows_written: usize,
    pub failures: Vec<StudyFailure>,
}

impl RunSummary {
    #[must_use]
    pub fn new(project: Project, studies_listed: usize) -> Self {
        Self {
            project,
            studies_listed,
            rows_written: 0,
            failures: Vec::new(),
        }
    }

    /// Fold one outcome into the counters.
    pub fn record(&mut self, outcome: &StudyOutcome) {
        match outcome {
            StudyOutcome::Written(_) => self.rows_written += 1,
            StudyOutcome::Failed(failure) => self.failures.push(failure.clone()),
        }
    }

    /// Every listed study produced a row.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.rows_written == self.studies_listed
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.rows_written, self.studies_listed)
    }
}
