//! Filesystem convenience helpers
//!
//! These functions return `elasi_errors::Error` with the failing path
//! attached, so callers can propagate them with `?`.

use elasi_errors::{Error, StorageError};
use std::path::Path;
use tokio::fs;

/// Result type for filesystem operations
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome of [`ensure_dir`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExisted,
}

/// Create a single directory with the given permission bits.
///
/// An existing directory at `path` is not an error. Every other failure is,
/// including a missing parent and an existing non-directory at `path`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created.
pub async fn ensure_dir(path: &Path, mode: u32) -> Result<DirStatus> {
    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    builder.mode(mode);
    #[cfg(not(unix))]
    let _ = mode;

    match builder.create(path).await {
        Ok(()) => Ok(DirStatus::Created),
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            if is_dir(path).await {
                Ok(DirStatus::AlreadyExisted)
            } else {
                Err(StorageError::from_io_with_path(&e, path).into())
            }
        }
        Err(e) => Err(StorageError::from_io_with_path(&e, path).into()),
    }
}

/// Write `contents` to `path`, replacing any existing file
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub async fn write_file(path: &Path, contents: impl AsRef<[u8]>) -> Result<()> {
    fs::write(path, contents)
        .await
        .map_err(|e| StorageError::from_io_with_path(&e, path).into())
}

/// Check if a path exists and is a directory
pub async fn is_dir(path: &Path) -> bool {
    fs::metadata(path).await.is_ok_and(|m| m.is_dir())
}
