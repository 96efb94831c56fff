//! Integration tests for the elasi-build CLI

#[cfg(test)]
#[cfg(unix)]
mod tests {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};
    use std::process::{Command, Output};
    use tempfile::TempDir;

    const PACKAGE_JSON: &str = r#"{
  "name": "elasi",
  "version": "3.1.4",
  "exports": {
    ".": { "import": "./dist/esm/index.js" },
    "./core": { "import": "./dist/esm/core.js" }
  }
}"#;

    const HEADER: &str = "/*! ELASI v#VERSION# (c) #YEAR# */";

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("package.json"), PACKAGE_JSON).unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/copyright-header.txt"), HEADER).unwrap();
        dir
    }

    fn install_converter(root: &Path, body: &str) -> PathBuf {
        let bin = root.join("node_modules/.bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join("mz");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn elasi_build(root: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_elasi-build"))
            .arg("--root")
            .arg(root)
            .args(["--year", "2024", "--color", "never"])
            .args(args)
            .env_remove("ELASI_ROOT")
            .env_remove("ELASI_CONVERTER")
            .env_remove("ELASI_BUILD_YEAR")
            .env_remove("ELASI_CONVERTER_TIMEOUT")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to execute elasi-build")
    }

    #[test]
    fn test_cli_version() {
        let output = Command::new(env!("CARGO_BIN_EXE_elasi-build"))
            .arg("--version")
            .output()
            .expect("Failed to execute elasi-build");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("elasi-build"));
    }

    #[test]
    fn test_cli_help() {
        let output = Command::new(env!("CARGO_BIN_EXE_elasi-build"))
            .arg("--help")
            .output()
            .expect("Failed to execute elasi-build");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("import-map template"));
        assert!(stdout.contains("--root"));
        assert!(stdout.contains("--converter"));
    }

    #[test]
    fn test_cli_invalid_flag() {
        let output = Command::new(env!("CARGO_BIN_EXE_elasi-build"))
            .arg("--no-such-flag")
            .output()
            .expect("Failed to execute elasi-build");

        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("unexpected argument"));
    }

    #[test]
    fn test_successful_build_writes_template() {
        let dir = project();
        install_converter(dir.path(), "mkdir -p dist/esm\necho converted");

        let output = elasi_build(dir.path(), &[]);

        assert_eq!(output.status.code(), Some(0));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.starts_with("*** Building ELASI ***"));
        assert!(stdout.trim_end().ends_with("Complete."));

        let written =
            fs::read_to_string(dir.path().join("dist/esm/import-map-template.json")).unwrap();
        assert_eq!(
            written,
            "{\n  \"imports\": {\n    \"elasi\": \"/elasi/index.js\",\n    \"elasi/core\": \"/elasi/core.js\"\n  }\n}"
        );
    }

    #[test]
    fn test_header_reaches_converter() {
        let dir = project();
        install_converter(
            dir.path(),
            "printf '%s' \"$1\" > arg1.txt\nmkdir -p dist/esm",
        );

        let output = elasi_build(dir.path(), &[]);

        assert!(output.status.success());
        let arg = fs::read_to_string(dir.path().join("arg1.txt")).unwrap();
        assert_eq!(arg, "--prepend=/*! ELASI v3.1.4 (c) 2024 */");
    }

    #[test]
    fn test_converter_failure_exits_one() {
        let dir = project();
        install_converter(dir.path(), "echo 'unknown option' >&2\nexit 2");

        let output = elasi_build(dir.path(), &[]);

        assert_eq!(output.status.code(), Some(1));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Error:"));
        assert!(stderr.contains("unknown option"));
        assert!(!dir
            .path()
            .join("dist/esm/import-map-template.json")
            .exists());
    }

    #[test]
    fn test_missing_package_json_exits_one() {
        let dir = project();
        fs::remove_file(dir.path().join("package.json")).unwrap();
        install_converter(dir.path(), "touch ran.txt");

        let output = elasi_build(dir.path(), &[]);

        assert_eq!(output.status.code(), Some(1));
        assert!(!dir.path().join("ran.txt").exists());
    }

    #[test]
    fn test_converter_flag_overrides_default() {
        let dir = project();
        let tools = TempDir::new().unwrap();
        let converter = install_converter(tools.path(), "mkdir -p dist/esm");

        let output = elasi_build(dir.path(), &["--converter", converter.to_str().unwrap()]);

        assert!(output.status.success());
        assert!(dir
            .path()
            .join("dist/esm/import-map-template.json")
            .exists());
    }

    #[test]
    fn test_json_report() {
        let dir = project();
        install_converter(dir.path(), "mkdir -p dist/esm");

        let output = elasi_build(dir.path(), &["--json"]);

        assert!(output.status.success());
        let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["version"], "3.1.4");
        assert_eq!(report["year"], 2024);
        assert_eq!(report["entries"], 2);
    }
}
