//! Status filters for the study listing endpoint.
//!
//! Serialized with the platform's upper-case wire values. Parsing is lenient
//! so the same enum can be fed from config files and CLI flags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Lifecycle state of a study, as accepted by the listing filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum StudyStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "PAUSED")]
    Paused,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "AWAITING REVIEW")]
    AwaitingReview,
}

impl StudyStatus {
    /// Every status a cost report is interested in. Drafts and unpublished
    /// studies have no spend, so they are never listed.
    pub const ALL: [Self; 4] = [
        Self::Completed,
        Self::Active,
        Self::Paused,
        Self::AwaitingReview,
    ];

    /// Value sent in the `state` query parameter.
    #[must_use]
    pub const fn as_wire(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Paused => "PAUSED",
            Self::Completed => "COMPLETED",
            Self::AwaitingReview => "AWAITING REVIEW",
        }
    }

    /// Human-facing spelling used by the CLI and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Completed => "completed",
            Self::AwaitingReview => "awaiting-review",
        }
    }
}

impl fmt::Display for StudyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "paused" => Ok(Self::Paused),
            "completed" => Ok(Self::Completed),
            "awaiting-review" => Ok(Self::AwaitingReview),
            _ => Err(CoreError::UnknownStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for StudyStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
