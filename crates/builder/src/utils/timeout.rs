//! Timeout utilities for build operations

use elasi_errors::{BuildError, Error};
use std::future::Future;
use std::time::Duration;

/// Execute a future with a timeout
pub async fn with_timeout<T, F>(future: F, timeout_seconds: u64) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    tokio::time::timeout(Duration::from_secs(timeout_seconds), future)
        .await
        .map_err(|_| -> Error {
            BuildError::Timeout {
                seconds: timeout_seconds,
            }
            .into()
        })?
}

/// Execute a future with an optional timeout
pub async fn with_optional_timeout<T, F>(future: F, timeout_seconds: Option<u64>) -> Result<T, Error>
where
    F: Future<Output = Result<T, Error>>,
{
    if let Some(timeout) = timeout_seconds {
        with_timeout(future, timeout).await
    } else {
        future.await
    }
}
