//! Error types for calql.
//!
//! Rendering a specification has no failure mode of its own. These errors
//! come from catalog lookups, loading specification documents, and reading
//! configuration.

use thiserror::Error;

/// The main error type for calql operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Function name not present in the kernel catalog.
    #[error("Unknown function: '{0}'")]
    UnknownFunction(String),

    /// Malformed JSON specification document.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Malformed TOML specification or config document.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calql operations.
pub type SpecResult<T> = Result<T, SpecError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SpecError::UnknownFunction("median".to_string());
        assert_eq!(err.to_string(), "Unknown function: 'median'");
    }
}
