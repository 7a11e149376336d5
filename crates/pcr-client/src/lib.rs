//! # pcr-client
//!
//! HTTP client for the Prolific research platform API.
//!
//! Four read-only resources are consumed:
//! - `GET /projects/{id}` for the project title
//! - `GET /projects/{id}/studies` for the paginated study listing
//! - `GET /studies/{id}` for timing and reward details
//! - `GET /studies/{id}/cost` for the reward/bonus breakdown
//!
//! Requests are issued one at a time. Nothing is retried.

pub mod cost;
pub mod projects;
pub mod studies;

mod error;
mod http;

pub use error::ClientError;

use pcr_config::ApiConfig;
use reqwest::Url;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::http::{check_response, read_json};

const USER_AGENT: &str = concat!("prolific-cost/", env!("CARGO_PKG_VERSION"));

/// Client for the platform API, built once per run from an [`ApiConfig`].
pub struct ProlificClient {
    http: reqwest::Client,
    base_url: String,
    page_size: u32,
}

impl ProlificClient {
    /// Build a client carrying the credential and timeout from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse,
    /// [`ClientError::InvalidCredential`] if the token cannot be sent as a
    /// header, or [`ClientError::Http`] if the underlying client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let base_url = config.base_url().to_string();
        parse_url(&base_url)?;

        let mut auth = HeaderValue::from_str(&format!(
            "{} {}",
            config.auth_scheme.trim(),
            config.token.trim()
        ))
        .map_err(|_| ClientError::InvalidCredential)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            page_size: config.page_size,
        })
    }

    /// API root this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join path segments onto the base URL, percent-encoding each one.
    ///
    /// `.` and `..` pass through encoding unchanged and would be collapsed
    /// by URL parsing, so they are refused.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        for segment in segments {
            if segment.chars().all(|c| c == '.') {
                return Err(ClientError::InvalidUrl {
                    url: format!("{url}/{segment}"),
                    reason: "empty or dot-only path segment".to_string(),
                });
            }
            url.push('/');
            url.push_str(&urlencoding::encode(segment));
        }
        parse_url(&url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ClientError> {
        tracing::debug!(%url, "GET");
        let resp = check_response(self.http.get(url).send().await?).await?;
        read_json(resp).await
    }
}

fn parse_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|e| ClientError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str, token: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            token: token.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn builds_with_default_config_and_token() {
        let client = ProlificClient::new(&config("https://api.prolific.com/api/v1/", "tok"))
            .expect("client should build");
        assert_eq!(client.base_url(), "https://api.prolific.com/api/v1");
        assert_eq!(client.page_size, 100);
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let result = ProlificClient::new(&config("not a url", "tok"));
        assert!(matches!(result, Err(ClientError::InvalidUrl { .. })));
    }

    #[test]
    fn rejects_token_with_newline() {
        let result = ProlificClient::new(&config("https://example.com", "abc\ndef"));
        assert!(matches!(result, Err(ClientError::InvalidCredential)));
    }

    #[test]
    fn endpoint_encodes_segments() {
        let client = ProlificClient::new(&config("https://example.com/api/v1", "tok")).unwrap();
        let url = client.endpoint(&["studies", "a b?c", "cost"]).unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/v1/studies/a%20b%3Fc/cost");
    }

    #[test]
    fn endpoint_refuses_dot_segments() {
        let client = ProlificClient::new(&config("https://example.com/api/v1", "tok")).unwrap();
        for id in ["", ".", ".."] {
            let result = client.endpoint(&["projects", id]);
            assert!(matches!(result, Err(ClientError::InvalidUrl { .. })), "{id:?}");
        }
    }
}
