use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A named grouping of studies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    /// Display name; only used to name the output file.
    pub name: String,
}

impl Project {
    /// Build a project, falling back to the identifier when the platform has
    /// no title for it.
    #[must_use]
    pub fn new(id: impl Into<String>, title: Option<String>) -> Self {
        let id = id.into();
        let name = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| id.clone());
        Self { id, name }
    }

    /// Trim and check a user-supplied project identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if the identifier is blank,
    /// contains a path separator, or is a dot segment such as `..`, which
    /// URL normalization would collapse into a different endpoint.
    pub fn validate_id(id: &str) -> Result<&str, CoreError> {
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(
                "project identifier must not be empty".to_string(),
            ));
        }
        if trimmed.contains('/') {
            return Err(CoreError::Validation(format!(
                "project identifier '{trimmed}' must not contain '/'"
            )));
        }
        if trimmed.chars().all(|c| c == '.') {
            return Err(CoreError::Validation(format!(
                "project identifier '{trimmed}' is not a valid identifier"
            )));
        }
        Ok(trimmed)
    }
}
