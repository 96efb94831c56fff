//! Build pipeline error types

use std::borrow::Cow;

use crate::UserFacingError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum BuildError {
    #[error("converter {program} exited with {}: {stderr}", exit_label(.code))]
    ConverterFailed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("converter timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("invalid export entry {key}: {message}")]
    InvalidExport { key: String, message: String },
}

#[allow(clippy::ref_option)]
fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_string(),
    }
}

impl UserFacingError for BuildError {
    fn user_message(&self) -> Cow<'_, str> {
        Cow::Owned(self.to_string())
    }

    fn user_hint(&self) -> Option<&'static str> {
        match self {
            Self::ConverterFailed { .. } => Some(
                "Check the converter output above. Sources may already be partially converted.",
            ),
            Self::Timeout { .. } => Some("Increase converter.timeout_secs or remove it."),
            Self::InvalidExport { .. } => {
                Some("Every entry under \"exports\" needs a string \"import\" field.")
            }
        }
    }

    fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    fn user_code(&self) -> Option<&'static str> {
        let code = match self {
            Self::ConverterFailed { .. } => "build.converter_failed",
            Self::Timeout { .. } => "build.timeout",
            Self::InvalidExport { .. } => "build.invalid_export",
        };
        Some(code)
    }
}
