//! Host platform implementation backed by tokio

pub mod process;

use std::sync::Arc;

/// Host platform implementation
pub struct NativePlatform;

impl NativePlatform {
    /// Create a new host platform instance
    #[allow(clippy::new_ret_no_self)]
    #[must_use]
    pub fn new() -> crate::core::Platform {
        crate::core::Platform::new(Arc::new(process::NativeProcessOperations::new()))
    }
}
