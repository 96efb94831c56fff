//! Package metadata as read from `package.json`

use elasi_errors::BuildError;
use serde::{Deserialize, Serialize};

/// The subset of `package.json` the build reads.
///
/// `exports` keeps the key order of the source file, which is also the
/// order of the generated import map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Package version, used verbatim in the copyright header
    pub version: String,
    /// Export-path key to export entry
    #[serde(default)]
    pub exports: serde_json::Map<String, serde_json::Value>,
}

/// A single entry under `exports`. Only the ESM `import` target is used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportEntry {
    pub import: String,
}

impl PackageMetadata {
    /// Parse package metadata from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON or lacks `version`.
    pub fn from_json_str(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Export entries in declaration order
    ///
    /// # Errors
    ///
    /// Returns an error naming the first entry that has no string `import`.
    pub fn export_entries(&self) -> Result<Vec<(String, ExportEntry)>, BuildError> {
        self.exports
            .iter()
            .map(|(key, value)| {
                ExportEntry::deserialize(value)
                    .map(|entry| (key.clone(), entry))
                    .map_err(|e| BuildError::InvalidExport {
                        key: key.clone(),
                        message: e.to_string(),
                    })
            })
            .collect()
    }

    /// The version as a semantic version, if it parses as one
    #[must_use]
    pub fn semver(&self) -> Option<semver::Version> {
        semver::Version::parse(&self.version).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exports_keep_file_order() {
        let meta = PackageMetadata::from_json_str(
            r#"{
                "version": "1.0.0",
                "exports": {
                    "./zeta": { "import": "./dist/esm/zeta.js" },
                    "./alpha": { "import": "./dist/esm/alpha.js" },
                    "./mid": { "import": "./dist/esm/mid.js" }
                }
            }"#,
        )
        .unwrap();

        let keys: Vec<_> = meta
            .export_entries()
            .unwrap()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, ["./zeta", "./alpha", "./mid"]);
    }

    #[test]
    fn extra_export_conditions_are_ignored() {
        let meta = PackageMetadata::from_json_str(
            r#"{
                "version": "1.0.0",
                "exports": {
                    ".": { "import": "./dist/esm/index.js", "require": "./dist/umd/index.js" }
                }
            }"#,
        )
        .unwrap();

        let entries = meta.export_entries().unwrap();
        assert_eq!(entries[0].1.import, "./dist/esm/index.js");
    }

    #[test]
    fn missing_exports_is_empty() {
        let meta = PackageMetadata::from_json_str(r#"{ "version": "0.1.0" }"#).unwrap();
        assert!(meta.export_entries().unwrap().is_empty());
    }

    #[test]
    fn entry_without_import_is_rejected() {
        let meta = PackageMetadata::from_json_str(
            r#"{ "version": "1.0.0", "exports": { "./cjs": { "require": "./x.cjs" } } }"#,
        )
        .unwrap();

        let err = meta.export_entries().unwrap_err();
        assert!(matches!(err, BuildError::InvalidExport { ref key, .. } if key == "./cjs"));
    }

    #[test]
    fn non_semver_version_is_kept() {
        let meta = PackageMetadata::from_json_str(r#"{ "version": "next" }"#).unwrap();
        assert_eq!(meta.version, "next");
        assert!(meta.semver().is_none());
    }
}
