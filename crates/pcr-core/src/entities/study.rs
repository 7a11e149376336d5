use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// One entry of the paginated study listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudySummary {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub internal_name: String,
    /// Absent for studies that were never published.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_available_places: u32,
    /// Total spend in minor units, including platform fees. Integer or
    /// float on the wire.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_cost: f64,
}

impl StudySummary {
    /// Label used in log lines: internal name when known, id otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        if self.internal_name.is_empty() {
            &self.id
        } else {
            &self.internal_name
        }
    }
}

/// Full study record; only the timing and reward fields are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudyDetail {
    /// Reward per completion, minor units.
    pub reward: f64,
    /// Minutes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub estimated_completion_time: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_time_taken_seconds: f64,
    /// Minor units per hour, as observed by the platform.
    #[serde(default, deserialize_with = "null_as_default")]
    pub average_reward_per_hour: f64,
}
