//! elasi-build - Build orchestrator for the ELASI ES module distribution
//!
//! Renders the copyright header, runs the module converter over the source
//! tree and writes the import-map template for the package exports.

mod cli;
mod display;
mod error;
mod events;

use crate::cli::Cli;
use crate::display::OutputRenderer;
use crate::error::CliError;
use crate::events::EventHandler;
use clap::Parser;
use elasi_builder::{BuildContext, Builder};
use elasi_config::Config;
use elasi_events::EventReceiver;
use elasi_types::BuildReport;
use std::path::{Path, PathBuf};
use std::process;
use tokio::select;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json_mode = cli.global.json;

    init_tracing(json_mode, cli.global.debug);

    let renderer = OutputRenderer::new(json_mode, cli.global.color);
    if let Err(e) = renderer.render_banner() {
        eprintln!("Error: {e}");
        process::exit(1);
    }

    let result = match run(cli, renderer.clone()).await {
        Ok(report) => renderer.render_build_report(&report).map_err(CliError::from),
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("Application error: {}", e);
        if json_mode {
            renderer.render_failure(&e).unwrap_or(());
        } else {
            eprintln!("Error: {e}");
        }
        process::exit(1);
    }
}

/// Main application logic
async fn run(cli: Cli, renderer: OutputRenderer) -> Result<BuildReport, CliError> {
    info!("Starting elasi-build v{}", env!("CARGO_PKG_VERSION"));

    let root = resolve_root(cli.root.as_deref())?;

    // Load configuration with proper precedence:
    // 1. Start with file config (or defaults)
    let mut config = Config::load_or_default(cli.global.config.as_deref(), &root).await?;

    // 2. Merge environment variables
    config.merge_env()?;

    // 3. Apply CLI flags (highest precedence)
    apply_cli_config(&mut config, &cli);

    let (event_sender, event_receiver) = elasi_events::channel();
    let ctx = BuildContext::new(root, config).with_event_sender(event_sender);
    let mut event_handler = EventHandler::new(renderer, cli.global.debug);

    build_with_events(&Builder::new(), &ctx, event_receiver, &mut event_handler).await
}

/// Drive the build while rendering its events as they arrive
async fn build_with_events(
    builder: &Builder,
    ctx: &BuildContext,
    mut event_receiver: EventReceiver,
    event_handler: &mut EventHandler,
) -> Result<BuildReport, CliError> {
    let mut build_future = Box::pin(builder.build(ctx));

    loop {
        select! {
            result = &mut build_future => {
                // Drain any remaining events
                while let Ok(event) = event_receiver.try_recv() {
                    event_handler.handle_event(event);
                }
                return result.map_err(CliError::from);
            }

            event = event_receiver.recv() => {
                match event {
                    Some(event) => event_handler.handle_event(event),
                    None => { /* Channel closed: keep waiting for the build to finish */ }
                }
            }
        }
    }
}

/// Resolve the project root to an absolute path
fn resolve_root(root: Option<&Path>) -> Result<PathBuf, CliError> {
    let root = match root {
        Some(path) if path.as_os_str().is_empty() => {
            return Err(CliError::InvalidArguments(
                "project root must not be empty".to_string(),
            ));
        }
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };
    Ok(std::path::absolute(root)?)
}

/// Apply CLI configuration overrides (highest precedence)
fn apply_cli_config(config: &mut Config, cli: &Cli) {
    if let Some(converter) = &cli.converter {
        config.converter.program = Some(converter.clone());
    }
    if let Some(year) = cli.year {
        config.build.year = Some(year);
    }
    if let Some(timeout) = cli.timeout {
        config.converter.timeout_secs = (timeout > 0).then_some(timeout);
    }
}

/// Initialize tracing/logging
///
/// Logs always go to stderr. JSON mode switches to JSON log lines so stdout
/// carries only the report.
fn init_tracing(json_mode: bool, debug_enabled_flag: bool) {
    let default_filter = if debug_enabled_flag {
        "info,elasi=debug,elasi_build=debug,elasi_builder=debug"
    } else {
        "warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    if json_mode {
        tracing_subscriber::fmt()
            .json()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .with_target(debug_enabled_flag)
            .without_time()
            .init();
    }
}
