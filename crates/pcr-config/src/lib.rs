//! # pcr-config
//!
//! Layered configuration loading for prolific-cost using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PCR_*` prefix, `__` as separator)
//! 2. `PROLIFIC_API_TOKEN`, mapped to `api.token`
//! 3. Project-level `.pcr/config.toml`
//! 4. User-level `~/.config/prolific-cost/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PCR_API__TOKEN` -> `api.token`, `PCR_REPORT__TIMEZONE` -> `report.timezone`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use pcr_config::PcrConfig;
//!
//! let config = PcrConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//! println!("API: {}", config.api.base_url());
//! ```

mod api;
mod error;
mod report;

pub use api::{ApiConfig, MAX_PAGE_SIZE};
pub use error::ConfigError;
pub use report::ReportConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable the platform's own tooling documents for the token.
pub const LEGACY_TOKEN_VAR: &str = "PROLIFIC_API_TOKEN";

/// Project-local config file, relative to the working directory.
pub const LOCAL_CONFIG_PATH: &str = ".pcr/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PcrConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

impl PcrConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env` -- use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a
    /// value has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the working directory.
    ///
    /// Variables already set in the process environment are not overwritten.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Legacy token variable
        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_TOKEN_VAR])
                .map(|_| "api.token".into()),
        );

        // Layer 4: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("PCR_").split("__"));

        figment
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.report.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("prolific-cost").join("config.toml"))
    }
}
