//! Resolved filesystem locations for one project root

use crate::{constants, Config};
use std::path::{Path, PathBuf};

/// Every path the build reads, writes or executes, derived from the
/// project root and the loaded configuration
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
    converter: PathBuf,
    manifest_file: String,
}

impl ProjectLayout {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: &Config) -> Self {
        let root = root.into();
        let converter = match &config.converter.program {
            Some(program) if program.is_absolute() => program.clone(),
            Some(program) => root.join(program),
            None => root.join(constants::CONVERTER_BIN),
        };
        Self {
            root,
            converter,
            manifest_file: config.manifest.file_name.clone(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn package_json(&self) -> PathBuf {
        self.root.join(constants::PACKAGE_JSON)
    }

    #[must_use]
    pub fn copyright_header(&self) -> PathBuf {
        self.root
            .join(constants::SRC_DIR)
            .join(constants::COPYRIGHT_HEADER)
    }

    #[must_use]
    pub fn dist_dir(&self) -> PathBuf {
        self.root.join(constants::DIST_DIR)
    }

    #[must_use]
    pub fn esm_dir(&self) -> PathBuf {
        self.dist_dir().join(constants::ESM_DIR)
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.esm_dir().join(&self.manifest_file)
    }

    #[must_use]
    pub fn converter(&self) -> &Path {
        &self.converter
    }
}
