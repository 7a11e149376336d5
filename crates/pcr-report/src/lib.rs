//! # pcr-report
//!
//! The report builder: resolve a project, list its studies, and turn each
//! study into one CSV row.
//!
//! ```text
//! ResolveProject → ListStudies → { FetchDetail → FetchCost → Derive → WriteRow } × N → Done
//! ```
//!
//! Only the first two steps can fail the run. Everything inside the
//! per-study loop becomes a [`StudyOutcome`]; failed studies are skipped and
//! recorded in the [`RunSummary`].

mod builder;
mod error;
mod naming;
mod outcome;
mod writer;

pub use builder::{ReportBuilder, ReportProgress};
pub use error::ReportError;
pub use naming::{default_report_path, safe_file_stem};
pub use outcome::{FetchStage, RunSummary, StudyFailure, StudyOutcome};
pub use writer::{HEADER, ReportWriter, format_published_at};
