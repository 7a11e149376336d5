//! CSV serialization of report rows.
//!
//! The header goes out as soon as the writer is created, and every row is
//! flushed on its own, so the file on disk only ever holds whole rows.

use std::io::Write;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use pcr_core::ReportRow;
use pcr_core::metrics::{round_currency, round_hours};

use crate::error::ReportError;

/// Column order of every report.
pub const HEADER: [&str; 12] = [
    "study_name",
    "internal_name",
    "study_id",
    "published_at",
    "total_available_places",
    "estimated_completion_time",
    "average_completion_time",
    "intended_reward_per_hour",
    "average_reward_per_hour",
    "total_study_hours",
    "total_study_rewards",
    "total_study_cost",
];

/// Append-only CSV sink for [`ReportRow`]s.
pub struct ReportWriter<W: Write> {
    inner: csv::Writer<W>,
    timezone: Tz,
}

impl<W: Write> ReportWriter<W> {
    /// Wrap `sink` and write the header row.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the header cannot be written.
    pub fn new(sink: W, timezone: Tz) -> Result<Self, ReportError> {
        let mut inner = csv::Writer::from_writer(sink);
        inner.write_record(HEADER)?;
        inner.flush()?;
        Ok(Self { inner, timezone })
    }

    /// Serialize and flush one row.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the sink rejects the write.
    pub fn write_row(&mut self, row: &ReportRow) -> Result<(), ReportError> {
        let record = self.record(row);
        self.inner.write_record(record)?;
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying sink.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Io`] if the final flush fails.
    pub fn into_inner(self) -> Result<W, ReportError> {
        self.inner
            .into_inner()
            .map_err(|e| ReportError::Io(e.into_error()))
    }

    fn record(&self, row: &ReportRow) -> [String; 12] {
        [
            row.study_name.clone(),
            row.internal_name.clone(),
            row.study_id.clone(),
            format_published_at(row.published_at, self.timezone),
            row.total_available_places.to_string(),
            round_hours(row.estimated_completion_time),
            round_hours(row.average_completion_time),
            round_currency(row.intended_reward_per_hour),
            round_currency(row.average_reward_per_hour),
            round_hours(row.total_study_hours),
            round_currency(row.total_study_rewards),
            round_currency(row.total_study_cost),
        ]
    }
}

/// Render a publish timestamp as local wall-clock time with its UTC offset,
/// e.g. `2024-03-05 09:30:00-08:00`. Unpublished studies render empty.
#[must_use]
pub fn format_published_at(published_at: Option<DateTime<Utc>>, timezone: Tz) -> String {
    published_at
        .map(|ts| {
            ts.with_timezone(&timezone)
                .format("%Y-%m-%d %H:%M:%S%:z")
                .to_string()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn row() -> ReportRow {
        ReportRow {
            study_name: "Reading, speed".to_string(),
            internal_name: "rs-1".to_string(),
            study_id: "abc".to_string(),
            published_at: Some(Utc.with_ymd_and_hms(2024, 3, 5, 17, 30, 0).unwrap()),
            total_available_places: 10,
            estimated_completion_time: 0.5,
            average_completion_time: 0.4,
            intended_reward_per_hour: 10.0,
            average_reward_per_hour: 12.5,
            total_study_hours: 5.0,
            total_study_rewards: 52.5,
            total_study_cost: 70.0,
        }
    }

    fn output(writer: ReportWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn header_is_written_without_rows() {
        let writer = ReportWriter::new(Vec::new(), chrono_tz::UTC).unwrap();
        assert_eq!(output(writer), format!("{}\n", HEADER.join(",")));
    }

    #[test]
    fn row_is_rounded_and_quoted() {
        let mut writer = ReportWriter::new(Vec::new(), chrono_tz::US::Pacific).unwrap();
        writer.write_row(&row()).unwrap();

        let text = output(writer);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "\"Reading, speed\",rs-1,abc,2024-03-05 09:30:00-08:00,10,0.50000,0.40000,10.00,12.50,5.00000,52.50,70.00"
        );
    }

    #[test]
    fn published_at_respects_daylight_saving() {
        let summer = Utc.with_ymd_and_hms(2024, 7, 1, 12, 0, 0).unwrap();
        assert_eq!(
            format_published_at(Some(summer), chrono_tz::US::Pacific),
            "2024-07-01 05:00:00-07:00"
        );
        assert_eq!(format_published_at(None, chrono_tz::US::Pacific), "");
    }
}
