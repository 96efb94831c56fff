//! Fixed project-relative names used by the build
//!
//! These follow the layout of the ELASI source repository and are not
//! exposed via TOML configuration.

pub const PACKAGE_JSON: &str = "package.json";
pub const SRC_DIR: &str = "src";
pub const COPYRIGHT_HEADER: &str = "copyright-header.txt";
pub const DIST_DIR: &str = "dist";
pub const ESM_DIR: &str = "esm";
pub const CONVERTER_BIN: &str = "node_modules/.bin/mz";

pub const CONFIG_FILE: &str = "elasi-build.toml";

/// Permission bits for a freshly created dist directory
pub const DIST_DIR_MODE: u32 = 0o755;

pub const VERSION_TOKEN: &str = "#VERSION#";
pub const YEAR_TOKEN: &str = "#YEAR#";
