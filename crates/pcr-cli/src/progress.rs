use indicatif::{ProgressBar, ProgressStyle};
use pcr_report::{ReportProgress, StudyOutcome};

/// Spinner while the listing loads, then a bar over the studies.
pub struct Progress {
    bar: Option<ProgressBar>,
}

fn terminal_columns() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
}

fn bar_template() -> &'static str {
    match terminal_columns() {
        Some(cols) if cols >= 110 => "{bar:40.cyan/blue} {pos}/{len} {msg}",
        Some(cols) if cols >= 80 => "{wide_bar:.cyan/blue} {pos}/{len} {msg}",
        _ => "{wide_bar:.cyan/blue} {percent}% {msg}",
    }
}

impl Progress {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        if !enabled {
            return Self { bar: None };
        }

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message("fetching studies");
        Self { bar: Some(bar) }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

impl ReportProgress for Progress {
    fn listed(&mut self, count: usize) {
        if let Some(bar) = &self.bar {
            bar.disable_steady_tick();
            bar.set_length(count as u64);
            bar.set_position(0);
            bar.set_style(
                ProgressStyle::with_template(bar_template())
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );
            bar.set_message("studies");
        }
    }

    fn study_done(&mut self, outcome: &StudyOutcome) {
        if let Some(bar) = &self.bar {
            bar.set_message(outcome.study_id().to_string());
            bar.inc(1);
        }
    }
}

impl Drop for Progress {
    fn drop(&mut self) {
        if let Some(bar) = &self.bar
            && !bar.is_finished()
        {
            bar.abandon();
        }
    }
}
