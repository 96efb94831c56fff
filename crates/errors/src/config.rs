//! Configuration and project-input error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("file not found: {path}")]
    NotFound { path: String },

    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

impl ConfigError {
    /// Classify a failed read of a project input file
    #[must_use]
    pub fn from_read(err: &std::io::Error, path: &std::path::Path) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                path: path.display().to_string(),
            },
            _ => Self::ReadFailed {
                path: path.display().to_string(),
                message: err.to_string(),
            },
        }
    }
}

impl UserFacingError for ConfigError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::NotFound { .. } => {
                Some("Run from the project root or pass --root pointing at it.")
            }
            Self::ParseError { .. } => Some("Fix the syntax error in the file and retry."),
            Self::InvalidValue { .. } => {
                Some("Fix the value noted in the error message and retry.")
            }
            Self::ReadFailed { .. } => Some("Ensure the file is readable by the current user."),
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::NotFound { .. } => "config.not_found",
            Self::ReadFailed { .. } => "config.read_failed",
            Self::ParseError { .. } => "config.parse_error",
            Self::InvalidValue { .. } => "config.invalid_value",
        };
        Some(code)
    }
}
