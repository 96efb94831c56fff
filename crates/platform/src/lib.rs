//! Platform abstraction layer for the ELASI build.
//!
//! This crate provides a unified interface for the operations the build
//! performs against the host:
//! - Process execution with event emission and error handling
//! - Filesystem helpers with error classification
//!
//! Process execution sits behind the `ProcessOperations` trait so the build
//! pipeline can be driven by a substitute implementation in tests.

pub mod core;
pub mod fs;
pub mod implementations;
pub mod process;

pub use core::{Platform, PlatformContext};
pub use implementations::native::NativePlatform;

/// Re-export commonly used types
pub use process::{CommandOutput, PlatformCommand, ProcessOperations};
