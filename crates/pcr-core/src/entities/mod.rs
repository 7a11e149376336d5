//! Entity structs for the platform objects a cost report reads.
//!
//! `StudySummary` and `StudyDetail` deserialize straight from the API
//! payloads; fields the platform may omit or send as `null` fall back to
//! zero/empty. `Project` and `CostBreakdown` are built by the client from
//! their nested wire shapes.

mod cost;
mod project;
mod study;

pub use cost::CostBreakdown;
pub use project::Project;
pub use study::{StudyDetail, StudySummary};

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
