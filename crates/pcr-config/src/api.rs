//! Platform API connection settings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

use crate::error::ConfigError;

/// Largest page the listing endpoint will honor.
pub const MAX_PAGE_SIZE: u32 = 500;

fn default_base_url() -> String {
    String::from("https://api.prolific.com/api/v1")
}

fn default_auth_scheme() -> String {
    String::from("Token")
}

const fn default_timeout_secs() -> u64 {
    30
}

const fn default_page_size() -> u32 {
    100
}

#[derive(Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API root, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Static API token.
    #[serde(default)]
    pub token: String,

    /// Prefix placed before the token in the `Authorization` header.
    #[serde(default = "default_auth_scheme")]
    pub auth_scheme: String,

    /// Per-request timeout in seconds; `0` waits forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `page_size` sent with the first listing request.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: String::new(),
            auth_scheme: default_auth_scheme(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

// Keeps the token out of debug logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .field("auth_scheme", &self.auth_scheme)
            .field("timeout_secs", &self.timeout_secs)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl ApiConfig {
    /// Check if a token is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Request timeout, `None` when disabled.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Base URL with any trailing slash removed.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validate the section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] without a token, and
    /// [`ConfigError::InvalidValue`] for an empty base URL or out-of-range
    /// page size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "api".to_string(),
            });
        }
        if self.base_url().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if !(1..=MAX_PAGE_SIZE).contains(&self.page_size) {
            return Err(ConfigError::InvalidValue {
                field: "api.page_size".to_string(),
                reason: format!("must be between 1 and {MAX_PAGE_SIZE}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.base_url, "https://api.prolific.com/api/v1");
        assert_eq!(config.auth_scheme, "Token");
        assert_eq!(config.page_size, 100);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);
        assert_eq!(
            ApiConfig::default().timeout(),
            Some(Duration::from_secs(30))
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let config = ApiConfig {
            base_url: "http://localhost:8080/api/v1/".into(),
            ..Default::default()
        };
        assert_eq!(config.base_url(), "http://localhost:8080/api/v1");
    }

    #[test]
    fn page_size_out_of_range_is_rejected() {
        let config = ApiConfig {
            token: "tok".into(),
            page_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "api.page_size"
        ));
    }

    #[test]
    fn debug_masks_token() {
        let config = ApiConfig {
            token: "secret-token".into(),
            ..Default::default()
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("***"));
    }
}
