#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Core type definitions for the ELASI build orchestrator
//!
//! This crate provides the data read from the project (package metadata and
//! its export entries) and the data produced by a build (the import map and
//! the run report).

pub mod import_map;
pub mod package;
pub mod reports;

// Re-export commonly used types
pub use import_map::{ImportMap, ImportMapTemplate};
pub use package::{ExportEntry, PackageMetadata};
pub use reports::BuildReport;
pub use semver::Version;
