//! Report pipeline error types.

use pcr_client::ClientError;
use thiserror::Error;

/// Failures that end a report run. Per-study fetch failures are not errors
/// here; they are reported through [`crate::StudyOutcome::Failed`].
#[derive(Debug, Error)]
pub enum ReportError {
    /// The project could not be resolved.
    #[error("unable to retrieve project {project_id}: {source}")]
    Project {
        project_id: String,
        #[source]
        source: ClientError,
    },

    /// The study listing could not be completed.
    #[error("unable to list studies for project {project_id}: {source}")]
    Listing {
        project_id: String,
        #[source]
        source: ClientError,
    },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The output sink could not be opened or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
