//! Import map produced from the package exports

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from public import specifier to resolved path.
///
/// Entries keep insertion order. Re-inserting an existing specifier replaces
/// its path in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportMap {
    entries: IndexMap<String, String>,
}

impl ImportMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a mapping, returning the path it replaced if the specifier was
    /// already present
    pub fn insert(&mut self, specifier: impl Into<String>, path: impl Into<String>) -> Option<String> {
        self.entries.insert(specifier.into(), path.into())
    }

    #[must_use]
    pub fn get(&self, specifier: &str) -> Option<&str> {
        self.entries.get(specifier).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(s, p)| (s.as_str(), p.as_str()))
    }
}

/// The persisted import-map template document: `{"imports": {...}}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportMapTemplate {
    pub imports: ImportMap,
}

impl ImportMapTemplate {
    #[must_use]
    pub fn new(imports: ImportMap) -> Self {
        Self { imports }
    }

    /// Render as pretty JSON with two-space indentation
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
