//! Cross-cutting error types for prolific-cost.
//!
//! Transport and report errors live in `pcr-client` and `pcr-report`. The
//! binary converges everything into `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A study status string did not match any known filter value.
    #[error("Unknown study status '{0}' (expected one of: active, paused, completed, awaiting-review)")]
    UnknownStatus(String),

    /// Data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}
