//! Core platform abstractions and context management

use elasi_events::{AppEvent, EventSender};
use std::sync::Arc;

use crate::process::{CommandOutput, PlatformCommand, ProcessOperations};

/// Context for platform operations, providing event emission
pub struct PlatformContext {
    event_sender: Option<EventSender>,
}

impl PlatformContext {
    /// Create a new platform context with event emission capabilities
    #[must_use]
    pub fn new(event_sender: Option<EventSender>) -> Self {
        Self { event_sender }
    }

    /// Emit a platform event if event sender is available
    pub fn emit_event(&self, event: AppEvent) {
        if let Some(sender) = &self.event_sender {
            let _ = sender.send(event);
        }
    }
}

/// Main platform abstraction providing access to all platform operations
#[derive(Clone)]
pub struct Platform {
    process_ops: Arc<dyn ProcessOperations>,
}

impl Platform {
    /// Create a new platform instance with the specified implementations
    pub fn new(process_ops: Arc<dyn ProcessOperations>) -> Self {
        Self { process_ops }
    }

    /// Get the platform for the host the build runs on
    #[must_use]
    pub fn current() -> Self {
        crate::implementations::native::NativePlatform::new()
    }

    /// Access process operations
    #[must_use]
    pub fn process(&self) -> &dyn ProcessOperations {
        &*self.process_ops
    }

    /// Create a platform context with event emission
    #[must_use]
    pub fn create_context(&self, event_sender: Option<EventSender>) -> PlatformContext {
        PlatformContext::new(event_sender)
    }

    /// Convenience method: Execute a command and get output
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned.
    pub async fn execute_command(
        &self,
        ctx: &PlatformContext,
        cmd: PlatformCommand,
    ) -> Result<CommandOutput, elasi_errors::Error> {
        self.process().execute_command(ctx, cmd).await
    }
}
