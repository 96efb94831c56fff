//! Package metadata loading

use elasi_errors::{ConfigError, Error};
use elasi_types::PackageMetadata;
use std::path::Path;
use tokio::fs;

/// Read and parse `package.json`
///
/// # Errors
///
/// Returns a config error if the file is missing, unreadable or not valid
/// package metadata.
pub async fn load_package_metadata(path: &Path) -> Result<PackageMetadata, Error> {
    let contents = fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::from_read(&e, path))?;

    PackageMetadata::from_json_str(&contents).map_err(|e| {
        ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
        .into()
    })
}
