//! Platform-specific operation errors

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

/// Errors that can occur during platform-specific operations
#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    #[error("process execution failed: {command} - {message}")]
    ProcessExecutionFailed { command: String, message: String },

    #[error("command not found: {command}")]
    CommandNotFound { command: String },

    #[error("permission denied: {operation} - {message}")]
    PermissionDenied { operation: String, message: String },
}

impl UserFacingError for PlatformError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::CommandNotFound { .. } | Self::ProcessExecutionFailed { .. } => Some(
                "Install the project dependencies so node_modules/.bin/mz exists, or set ELASI_CONVERTER.",
            ),
            Self::PermissionDenied { .. } => {
                Some("Adjust filesystem permissions for the project directory and retry.")
            }
        }
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ProcessExecutionFailed { .. } => "platform.process_failed",
            Self::CommandNotFound { .. } => "platform.command_not_found",
            Self::PermissionDenied { .. } => "platform.permission_denied",
        };
        Some(code)
    }
}
