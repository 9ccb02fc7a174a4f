//! Error types for markup rendering.

use thiserror::Error;

/// Hard failures raised while building a style table or rendering markup.
///
/// Malformed assignment syntax in a configuration fragment is *not* an error:
/// it is reported as a warning and the assignment is dropped. Malformed tokens
/// in rendered text are not errors either; the input passes through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// A code name is neither a configured style nor a built-in code.
    #[error("unknown style code '{name}'")]
    UnknownCode { name: String },

    /// A begin or end delimiter was configured as an empty string.
    #[error("{which} must not be empty")]
    EmptyDelimiter { which: &'static str },

    /// A named style was defined without any codes.
    #[error("style '{name}' has no codes")]
    EmptyStyle { name: String },

    /// Structured configuration could not be parsed.
    #[error("invalid style configuration: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for MarkupError {
    fn from(err: serde_yaml::Error) -> Self {
        MarkupError::Config(err.to_string())
    }
}

/// Result type for markup operations.
pub type Result<T> = std::result::Result<T, MarkupError>;
