//! Report type definitions for a build run

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Build report
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuildReport {
    /// Version read from the package metadata
    pub version: String,
    /// Year rendered into the copyright header
    pub year: i32,
    /// Written import-map template
    pub manifest_path: PathBuf,
    /// Number of import-map entries written
    pub entries: usize,
    /// Converter run time
    pub converter_duration_ms: u64,
}
