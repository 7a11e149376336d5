//! # pcr-core
//!
//! Core types, status filters, and metric derivation for prolific-cost.
//!
//! This crate holds everything that does not touch the network or the
//! filesystem:
//! - Entity structs for projects, study summaries, study details, and cost
//!   breakdowns
//! - The `StudyStatus` filter enum and its API wire values
//! - Pure metric derivation producing a [`ReportRow`]
//! - Rounding helpers applied at serialization time

pub mod entities;
pub mod enums;
pub mod errors;
pub mod metrics;

pub use entities::{CostBreakdown, Project, StudyDetail, StudySummary};
pub use enums::StudyStatus;
pub use errors::CoreError;
pub use metrics::ReportRow;
