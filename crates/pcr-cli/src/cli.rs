use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use pcr_config::PcrConfig;
use pcr_core::StudyStatus;

/// Top-level CLI parser for the `prolific-cost` binary.
#[derive(Debug, Parser)]
#[command(
    name = "prolific-cost",
    version,
    about = "Generate per-study cost reports for a Prolific project"
)]
pub struct Cli {
    /// Prolific project ID (prompted for when omitted)
    pub project_id: Option<String>,

    /// Path to the output CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Study status to include; repeat for several (default: all reportable)
    #[arg(short = 's', long = "status", value_parser = parse_status)]
    pub statuses: Vec<StudyStatus>,

    /// IANA time zone for `published_at` (e.g. `Europe/London`)
    #[arg(long)]
    pub timezone: Option<String>,

    /// Per-request timeout in seconds (0 disables)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Quiet mode (errors only, no summary line)
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Layer command-line flags on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut PcrConfig) {
        if !self.statuses.is_empty() {
            config.report.statuses.clone_from(&self.statuses);
        }
        if let Some(timezone) = &self.timezone {
            config.report.timezone.clone_from(timezone);
        }
        if let Some(timeout) = self.timeout {
            config.api.timeout_secs = timeout;
        }
    }

    #[must_use]
    pub fn show_progress(&self) -> bool {
        !self.quiet && !self.no_progress && std::io::stderr().is_terminal()
    }
}

fn parse_status(value: &str) -> Result<StudyStatus, String> {
    value.parse().map_err(|e: pcr_core::CoreError| e.to_string())
}
