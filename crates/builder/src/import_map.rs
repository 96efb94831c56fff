//! Import-map derivation from package exports
//!
//! Both rewrites are plain prefix substitutions on strings. No path
//! separator is added or normalized: `./core` becomes `elasi/core` and
//! `./dist/esm/core.js` becomes `/elasi/core.js` because the `/` is already
//! part of the remainder.

use elasi_config::ManifestConfig;
use elasi_errors::Error;
use elasi_events::{AppEvent, BuildEvent, EventEmitter};
use elasi_platform::fs;
use elasi_types::{ExportEntry, ImportMap, ImportMapTemplate};
use std::path::Path;

/// Public specifier for an export key: a single leading `.` becomes the alias
#[must_use]
pub fn specifier_for(export_path: &str, alias: &str) -> String {
    match export_path.strip_prefix('.') {
        Some(rest) => format!("{alias}{rest}"),
        None => export_path.to_string(),
    }
}

/// Public path for an export's `import` target: a leading dist prefix
/// becomes the public root
#[must_use]
pub fn resolve_path(import: &str, dist_prefix: &str, public_root: &str) -> String {
    match import.strip_prefix(dist_prefix) {
        Some(rest) => format!("{public_root}{rest}"),
        None => import.to_string(),
    }
}

/// Build the import map from export entries, in order.
///
/// When two keys produce the same specifier the later entry wins and a
/// warning event is emitted.
pub fn build_import_map(
    entries: &[(String, ExportEntry)],
    manifest: &ManifestConfig,
    emitter: &impl EventEmitter,
) -> ImportMap {
    let mut imports = ImportMap::new();
    for (export_path, entry) in entries {
        let specifier = specifier_for(export_path, &manifest.alias);
        let path = resolve_path(&entry.import, &manifest.dist_prefix, &manifest.public_root);

        if let Some(previous) = imports.insert(specifier.clone(), path.clone()) {
            emitter.emit(AppEvent::Build(BuildEvent::ImportOverwritten {
                specifier,
                previous,
                current: path,
            }));
        }
    }
    imports
}

/// Serialize the import-map template and write it to `path`
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn write_import_map(path: &Path, imports: ImportMap) -> Result<ImportMapTemplate, Error> {
    let template = ImportMapTemplate::new(imports);
    let json = template.to_pretty_json()?;
    fs::write_file(path, json).await?;
    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use elasi_events::EventSender;

    struct Silent;

    impl EventEmitter for Silent {
        fn event_sender(&self) -> Option<&EventSender> {
            None
        }
    }

    fn entry(import: &str) -> ExportEntry {
        ExportEntry {
            import: import.to_string(),
        }
    }

    #[test]
    fn rewrites_leading_prefixes() {
        let manifest = ManifestConfig::default();
        let map = build_import_map(
            &[("./core".to_string(), entry("./dist/esm/core.js"))],
            &manifest,
            &Silent,
        );
        assert_eq!(map.get("elasi/core"), Some("/elasi/core.js"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn root_export_maps_to_alias() {
        assert_eq!(specifier_for(".", "elasi"), "elasi");
        assert_eq!(specifier_for("./util/x", "elasi"), "elasi/util/x");
    }

    #[test]
    fn only_leading_text_is_replaced() {
        assert_eq!(specifier_for("core.", "elasi"), "core.");
        assert_eq!(specifier_for("..", "elasi"), "elasi.");
        assert_eq!(
            resolve_path("./lib/dist/esm/x.js", "./dist/esm", "/elasi"),
            "./lib/dist/esm/x.js"
        );
        assert_eq!(
            resolve_path("./dist/esm/dist/esm/x.js", "./dist/esm", "/elasi"),
            "/elasi/dist/esm/x.js"
        );
    }

    #[test]
    fn later_duplicate_wins_in_place() {
        let (tx, mut rx) = elasi_events::channel();
        let manifest = ManifestConfig::default();
        let map = build_import_map(
            &[
                ("./a".to_string(), entry("./dist/esm/first.js")),
                ("./b".to_string(), entry("./dist/esm/b.js")),
                ("./a".to_string(), entry("./dist/esm/second.js")),
            ],
            &manifest,
            &tx,
        );

        let order: Vec<_> = map.iter().collect();
        assert_eq!(
            order,
            [("elasi/a", "/elasi/second.js"), ("elasi/b", "/elasi/b.js")]
        );
        assert!(matches!(
            rx.try_recv().unwrap(),
            AppEvent::Build(BuildEvent::ImportOverwritten { ref specifier, .. }) if specifier == "elasi/a"
        ));
    }
}
