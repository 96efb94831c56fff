//! External source-to-module converter invocation

use crate::core::context::BuildContext;
use crate::utils::timeout::with_optional_timeout;
use elasi_errors::{BuildError, Error};
use elasi_events::{AppEvent, BuildEvent, EventEmitter};
use elasi_platform::{Platform, PlatformCommand};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// The converter executable and the flags it is run with
#[derive(Debug, Clone)]
pub struct Converter {
    program: PathBuf,
    recursive_flag: String,
    timeout_secs: Option<u64>,
}

impl Converter {
    /// Converter as configured for the context's project
    #[must_use]
    pub fn from_context(ctx: &BuildContext) -> Self {
        Self {
            program: ctx.layout.converter().to_path_buf(),
            recursive_flag: ctx.config.converter.recursive_flag.clone(),
            timeout_secs: ctx.config.converter.timeout_secs,
        }
    }

    /// Command line for one run: `--prepend=<header>` and the recursive flag,
    /// executed from the project root
    #[must_use]
    pub fn command(&self, ctx: &BuildContext, header: &str) -> PlatformCommand {
        let mut cmd = PlatformCommand::new(&self.program);
        cmd.arg(format!("--prepend={header}"))
            .arg(&self.recursive_flag)
            .current_dir(ctx.layout.root());
        cmd
    }

    /// Run the converter to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned, exits unsuccessfully
    /// or exceeds the configured timeout.
    pub async fn run(
        &self,
        platform: &Platform,
        ctx: &BuildContext,
        header: &str,
    ) -> Result<Duration, Error> {
        let cmd = self.command(ctx, header);
        ctx.emit(AppEvent::Build(BuildEvent::ConverterStarted {
            program: self.program.clone(),
            args: cmd.get_args().to_vec(),
        }));

        let pctx = platform.create_context(ctx.event_sender.clone());
        let start = Instant::now();
        let output = with_optional_timeout(
            platform.execute_command(&pctx, cmd),
            self.timeout_secs,
        )
        .await?;
        let duration = start.elapsed();

        for (stream, text) in [("stdout", output.stdout_text()), ("stderr", output.stderr_text())] {
            if !text.is_empty() {
                ctx.emit(AppEvent::Build(BuildEvent::ConverterOutput {
                    stream: stream.to_string(),
                    text,
                }));
            }
        }

        if !output.status.success() {
            return Err(BuildError::ConverterFailed {
                program: self.program.display().to_string(),
                code: output.status.code(),
                stderr: output.stderr_text(),
            }
            .into());
        }

        ctx.emit(AppEvent::Build(BuildEvent::ConverterCompleted { duration }));
        Ok(duration)
    }
}
