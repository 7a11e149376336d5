use anyhow::Context;
use pcr_config::{ConfigError, LEGACY_TOKEN_VAR, PcrConfig};

use crate::cli::Cli;

/// Load layered config, apply CLI overrides, and validate the result.
pub fn load_config(cli: &Cli) -> anyhow::Result<PcrConfig> {
    let mut config = PcrConfig::load_with_dotenv().context("failed to load configuration")?;
    cli.apply_overrides(&mut config);

    match config.validate() {
        Ok(()) => {}
        Err(error @ ConfigError::NotConfigured { .. }) => {
            anyhow::bail!("{error}: set {LEGACY_TOKEN_VAR} or PCR_API__TOKEN");
        }
        Err(error) => return Err(error.into()),
    }

    tracing::debug!(api = ?config.api, statuses = ?config.report.statuses, "configuration loaded");
    Ok(config)
}
