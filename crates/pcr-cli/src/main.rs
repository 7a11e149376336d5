#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pcr_client::ProlificClient;
use pcr_report::{ReportBuilder, ReportWriter, default_report_path};

mod bootstrap;
mod cli;
mod progress;
mod prompt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("prolific-cost error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = bootstrap::load_config(&cli)?;
    let project_id = match cli.project_id.as_deref() {
        Some(id) => pcr_core::Project::validate_id(id)?.to_string(),
        None => prompt::project_id()?,
    };

    let timezone = config.report.timezone()?;
    let client = ProlificClient::new(&config.api).context("failed to build API client")?;
    let builder = ReportBuilder::new(&client, &config.report.statuses);

    let mut progress = progress::Progress::new(cli.show_progress());
    let mut written_to: Option<PathBuf> = None;

    let (summary, _file) = builder
        .run(
            &project_id,
            |project| {
                let path = cli.output.clone().unwrap_or_else(|| {
                    default_report_path(
                        &config.report.output_dir,
                        project,
                        chrono::Local::now().naive_local(),
                    )
                });
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)?;
                }
                let file = File::create(&path)?;
                tracing::debug!(path = %path.display(), "report file created");
                written_to = Some(path);
                ReportWriter::new(file, timezone)
            },
            &mut progress,
        )
        .await?;
    progress.finish();

    let path = written_to.context("report finished without an output file")?;
    tracing::info!(path = %path.display(), rows = summary.rows_written, "wrote report");
    if !cli.quiet {
        println!("Wrote rows for {summary} studies to {}", path.display());
        if !summary.is_complete() {
            eprintln!(
                "{} studies were skipped, see the warnings above",
                summary.failures.len()
            );
        }
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PCR_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
