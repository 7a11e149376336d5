//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the platform API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds the server asked us to wait.
        retry_after_secs: u64,
    },

    /// Failed to parse a response body.
    #[error("parse error: {0}")]
    Parse(String),

    /// A configured or server-provided URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The token cannot be placed in an HTTP header.
    #[error("API token contains characters not allowed in an HTTP header")]
    InvalidCredential,

    /// A next-page link pointed back to a page that was already fetched.
    #[error("pagination cycle detected at {url}")]
    PaginationCycle { url: String },
}
