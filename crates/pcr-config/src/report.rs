//! Report output settings.

use chrono_tz::Tz;
use pcr_core::StudyStatus;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;

fn default_statuses() -> Vec<StudyStatus> {
    StudyStatus::ALL.to_vec()
}

fn default_timezone() -> String {
    String::from("US/Pacific")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("cost_reports")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Study states included in the listing.
    #[serde(default = "default_statuses")]
    pub statuses: Vec<StudyStatus>,

    /// IANA zone used to render `published_at`.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Directory for generated reports when no output path is given.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            statuses: default_statuses(),
            timezone: default_timezone(),
            output_dir: default_output_dir(),
        }
    }
}

impl ReportConfig {
    /// Parse the configured zone.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the name is not a known IANA zone.
    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.timezone
            .trim()
            .parse::<Tz>()
            .map_err(|error| ConfigError::InvalidValue {
                field: "report.timezone".to_string(),
                reason: error.to_string(),
            })
    }

    /// Validate the section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an unknown zone or an empty
    /// status filter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.timezone()?;
        if self.statuses.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "report.statuses".to_string(),
                reason: "at least one status is required".to_string(),
            });
        }
        Ok(())
    }
}
