#![deny(clippy::pedantic, unsafe_code)]
#![allow(clippy::module_name_repetitions)]
//! ELASI build orchestration
//!
//! This crate renders the copyright header, runs the external module
//! converter over the source tree and writes the import-map template derived
//! from the package exports.

mod converter;
mod core;
mod header;
mod import_map;
mod metadata;
mod utils;

pub use converter::Converter;
pub use core::builder::Builder;
pub use core::context::{current_year, BuildContext};
pub use header::{load_header_template, render_copyright_header};
pub use import_map::{build_import_map, resolve_path, specifier_for, write_import_map};
pub use metadata::load_package_metadata;
