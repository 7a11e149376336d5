//! Metric derivation for one study.
//!
//! All values are kept at full `f64` precision. Rounding happens only when a
//! row is serialized, via [`round_hours`] and [`round_currency`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{CostBreakdown, StudyDetail, StudySummary};

/// Decimal places for time and hour-derived fields.
pub const HOURS_PRECISION: usize = 5;

/// Decimal places for currency fields.
pub const CURRENCY_PRECISION: usize = 2;

const MINOR_UNITS_PER_MAJOR: f64 = 100.0;
const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Flattened, derived join of a summary, its detail, and its cost breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportRow {
    pub study_name: String,
    pub internal_name: String,
    pub study_id: String,
    pub published_at: Option<DateTime<Utc>>,
    pub total_available_places: u32,
    /// Platform estimate, hours.
    pub estimated_completion_time: f64,
    /// Observed average, hours.
    pub average_completion_time: f64,
    pub intended_reward_per_hour: f64,
    pub average_reward_per_hour: f64,
    pub total_study_hours: f64,
    pub total_study_rewards: f64,
    pub total_study_cost: f64,
}

impl ReportRow {
    /// Derive every report metric for one study. Pure; performs no I/O.
    #[must_use]
    pub fn derive(summary: &StudySummary, detail: &StudyDetail, cost: &CostBreakdown) -> Self {
        let estimated_hours = detail.estimated_completion_time / MINUTES_PER_HOUR;
        let average_hours = detail.average_time_taken_seconds / SECONDS_PER_HOUR;
        let reward = minor_to_major(detail.reward);

        Self {
            study_name: summary.name.clone(),
            internal_name: summary.internal_name.clone(),
            study_id: summary.id.clone(),
            published_at: summary.published_at,
            total_available_places: summary.total_available_places,
            estimated_completion_time: estimated_hours,
            average_completion_time: average_hours,
            intended_reward_per_hour: rate_per_hour(reward, estimated_hours),
            average_reward_per_hour: detail.average_reward_per_hour / MINOR_UNITS_PER_MAJOR,
            total_study_hours: estimated_hours * f64::from(summary.total_available_places),
            total_study_rewards: minor_to_major(cost.total_payout()),
            total_study_cost: minor_to_major(summary.total_cost),
        }
    }
}

/// `amount / hours`, or zero when there are no hours to divide by.
#[must_use]
pub fn rate_per_hour(amount: f64, hours: f64) -> f64 {
    if hours > 0.0 { amount / hours } else { 0.0 }
}

fn minor_to_major(amount: f64) -> f64 {
    amount / MINOR_UNITS_PER_MAJOR
}

/// Format a time/hour value with fixed precision.
#[must_use]
pub fn round_hours(value: f64) -> String {
    format_fixed(value, HOURS_PRECISION)
}

/// Format a currency value with fixed precision.
#[must_use]
pub fn round_currency(value: f64) -> String {
    format_fixed(value, CURRENCY_PRECISION)
}

fn format_fixed(value: f64, places: usize) -> String {
    let rendered = format!("{value:.places$}");
    // "-0.00" reads as a refund in a spreadsheet.
    if rendered.starts_with('-') && rendered[1..].chars().all(|c| c == '0' || c == '.') {
        rendered[1..].to_string()
    } else {
        rendered
    }
}
