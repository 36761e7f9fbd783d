//! Shared primitives for all Rust crates in VagasPlus.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across VagasPlus crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::Validation(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Creates a validated non-empty string, naming the field in the error.
    pub fn for_field(field: &str, value: impl Into<String>) -> AppResult<Self> {
        Self::new(value).map_err(|_| AppError::Validation(format!("{field} must not be empty")))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input or violated invariant.
    #[error("validation error: {0}")]
    Validation(String),

    /// Requested resource does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Caller must wait before repeating the operation.
    #[error("rate limited: {message}")]
    RateLimited {
        /// Human-readable explanation.
        message: String,
        /// Fixed window length the caller should wait out.
        retry_after_seconds: u64,
    },

    /// Persistence layer unreachable or failed to execute a query.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::{AppError, NonEmptyString};

    #[test]
    fn non_empty_string_rejects_whitespace() {
        let result = NonEmptyString::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn for_field_names_the_field() {
        let result = NonEmptyString::for_field("nome", "");
        assert!(matches!(result, Err(AppError::Validation(message)) if message == "nome must not be empty"));
    }

    #[test]
    fn rate_limited_display_contains_message() {
        let error = AppError::RateLimited {
            message: "try again in 15 minutes".to_owned(),
            retry_after_seconds: 900,
        };
        assert_eq!(error.to_string(), "rate limited: try again in 15 minutes");
    }
}
