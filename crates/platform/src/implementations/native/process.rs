//! Host process operations implementation
//!
//! Wraps `tokio::process::Command` with debug event emission and error
//! classification.

use async_trait::async_trait;
use elasi_errors::{Error, PlatformError};
use elasi_events::{AppEvent, GeneralEvent};
use std::collections::HashMap;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

use crate::core::PlatformContext;
use crate::process::{CommandOutput, PlatformCommand, ProcessOperations};

/// Host implementation of process operations
pub struct NativeProcessOperations;

impl NativeProcessOperations {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for NativeProcessOperations {
    fn default() -> Self {
        Self::new()
    }
}

fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn emit_process_finished(
    ctx: &PlatformContext,
    cmd: &PlatformCommand,
    output: &CommandOutput,
    duration: Duration,
) {
    let mut context = HashMap::new();
    context.insert("program".to_string(), cmd.program().display().to_string());
    context.insert(
        "exit_code".to_string(),
        output
            .status
            .code()
            .map_or_else(|| "signal".to_string(), |c| c.to_string()),
    );
    context.insert(
        "duration_ms".to_string(),
        duration_to_millis(duration).to_string(),
    );
    ctx.emit_event(AppEvent::General(GeneralEvent::debug_with_context(
        "process finished",
        context,
    )));
}

fn classify_spawn_error(cmd: &PlatformCommand, err: &std::io::Error) -> PlatformError {
    let command = cmd.program().display().to_string();
    match err.kind() {
        std::io::ErrorKind::NotFound => PlatformError::CommandNotFound { command },
        std::io::ErrorKind::PermissionDenied => PlatformError::PermissionDenied {
            operation: format!("execute {command}"),
            message: err.to_string(),
        },
        _ => PlatformError::ProcessExecutionFailed {
            command,
            message: err.to_string(),
        },
    }
}

#[async_trait]
impl ProcessOperations for NativeProcessOperations {
    async fn execute_command(
        &self,
        ctx: &PlatformContext,
        cmd: PlatformCommand,
    ) -> Result<CommandOutput, Error> {
        let start = Instant::now();

        let mut command = Command::new(cmd.program());
        command
            .args(cmd.get_args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(dir) = cmd.get_current_dir() {
            command.current_dir(dir);
        }

        tracing::debug!(program = %cmd.program().display(), args = ?cmd.get_args(), "spawning process");

        let output = command
            .output()
            .await
            .map_err(|e| classify_spawn_error(&cmd, &e))?;

        let output = CommandOutput {
            status: output.status,
            stdout: output.stdout,
            stderr: output.stderr,
        };

        emit_process_finished(ctx, &cmd, &output, start.elapsed());

        Ok(output)
    }
}
