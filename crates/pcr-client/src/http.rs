//! Turning platform responses into typed results.
//!
//! Every endpoint goes through [`check_response`] then [`read_json`], so a
//! study-level failure always carries the HTTP status or decode error that
//! caused it.

use reqwest::{Response, StatusCode, header::RETRY_AFTER};
use serde::de::DeserializeOwned;

use crate::error::ClientError;

/// Wait assumed when a 429 arrives without a usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Pass 2xx responses through; map everything else to a [`ClientError`].
///
/// A 429 becomes [`ClientError::RateLimited`]. Nothing retries it, but the
/// wait the platform asked for ends up in the skipped-study log line. Any
/// other failure keeps the response body, since the platform explains
/// permission and not-found errors there.
pub async fn check_response(resp: Response) -> Result<Response, ClientError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::TOO_MANY_REQUESTS => Err(ClientError::RateLimited {
            retry_after_secs: retry_after_secs(&resp),
        }),
        status => Err(ClientError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        }),
    }
}

/// Decode a successful body. Decode failures are reported as
/// [`ClientError::Parse`] rather than as transport errors.
pub async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let body = resp.text().await?;
    serde_json::from_str(&body).map_err(|e| ClientError::Parse(e.to_string()))
}

fn retry_after_secs(resp: &Response) -> u64 {
    resp.headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
