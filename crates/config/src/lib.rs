#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]

//! Configuration management for the ELASI build
//!
//! This crate handles loading and merging configuration from:
//! - Default values (hard-coded)
//! - Configuration file (`<root>/elasi-build.toml` or an explicit path)
//! - Environment variables
//! - CLI flags (applied by the binary)

pub mod constants;
mod layout;

pub use layout::ProjectLayout;

use elasi_errors::{ConfigError, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub converter: ConverterConfig,

    #[serde(default)]
    pub manifest: ManifestConfig,
}

/// Build run settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    /// Year rendered into the copyright header; current year when unset
    pub year: Option<i32>,
}

/// External converter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Converter executable; relative paths resolve against the project root
    pub program: Option<PathBuf>,
    #[serde(default = "default_recursive_flag")]
    pub recursive_flag: String,
    /// No timeout when unset
    pub timeout_secs: Option<u64>,
}

/// Import-map derivation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestConfig {
    /// Replaces the leading `.` of an export key
    #[serde(default = "default_alias")]
    pub alias: String,
    /// Prefix stripped from an export's `import` path
    #[serde(default = "default_dist_prefix")]
    pub dist_prefix: String,
    /// Replacement for `dist_prefix`
    #[serde(default = "default_public_root")]
    pub public_root: String,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            program: None,
            recursive_flag: default_recursive_flag(),
            timeout_secs: None,
        }
    }
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            alias: default_alias(),
            dist_prefix: default_dist_prefix(),
            public_root: default_public_root(),
            file_name: default_file_name(),
        }
    }
}

// Default value functions for serde
fn default_recursive_flag() -> String {
    "-ruben".to_string()
}

fn default_alias() -> String {
    "elasi".to_string()
}

fn default_dist_prefix() -> String {
    "./dist/esm".to_string()
}

fn default_public_root() -> String {
    "/elasi".to_string()
}

fn default_file_name() -> String {
    "import-map-template.json".to_string()
}

impl Config {
    /// Get the default config file path for a project root
    #[must_use]
    pub fn default_path(root: &Path) -> PathBuf {
        root.join(constants::CONFIG_FILE)
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, if the file contents
    /// contain invalid TOML syntax that cannot be parsed, or if a parsed
    /// value is out of range.
    pub async fn load_from_file(path: &Path) -> Result<Self, Error> {
        let contents = fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::from_read(&e, path))?;

        let config: Self = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but are not usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for a `build.year` outside
    /// `1000..=9999`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.build.year {
            Some(year) if !is_valid_year(year) => Err(ConfigError::InvalidValue {
                field: "build.year".to_string(),
                value: year.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Load configuration with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the project config file exists but cannot be read
    /// or contains invalid TOML syntax.
    pub async fn load(root: &Path) -> Result<Self, Error> {
        let config_path = Self::default_path(root);

        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "loading build config");
            Self::load_from_file(&config_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an optional path or use default
    ///
    /// If path is provided, loads from that file and a missing file is an
    /// error. If path is None, uses the default loading behavior.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be read or parsed
    pub async fn load_or_default(path: Option<&Path>, root: &Path) -> Result<Self, Error> {
        match path {
            Some(config_path) => Self::load_from_file(config_path).await,
            None => Self::load(root).await,
        }
    }

    /// Merge with environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values
    /// that cannot be parsed into the expected types.
    pub fn merge_env(&mut self) -> Result<(), Error> {
        // ELASI_CONVERTER
        if let Ok(program) = std::env::var("ELASI_CONVERTER") {
            if program.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "ELASI_CONVERTER".to_string(),
                    value: program,
                }
                .into());
            }
            self.converter.program = Some(PathBuf::from(program));
        }

        // ELASI_BUILD_YEAR
        if let Ok(year) = std::env::var("ELASI_BUILD_YEAR") {
            self.build.year = Some(parse_year(&year).ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: "ELASI_BUILD_YEAR".to_string(),
                    value: year.clone(),
                }
            })?);
        }

        // ELASI_CONVERTER_TIMEOUT
        if let Ok(timeout) = std::env::var("ELASI_CONVERTER_TIMEOUT") {
            let seconds: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
                field: "ELASI_CONVERTER_TIMEOUT".to_string(),
                value: timeout.clone(),
            })?;
            // 0 disables the timeout
            self.converter.timeout_secs = (seconds > 0).then_some(seconds);
        }

        Ok(())
    }
}

/// Parse a four-digit calendar year
#[must_use]
pub fn parse_year(value: &str) -> Option<i32> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|year| is_valid_year(*year))
}

/// Whether `year` renders as exactly four digits
#[must_use]
pub fn is_valid_year(year: i32) -> bool {
    (1000..=9999).contains(&year)
}
