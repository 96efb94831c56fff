//! Event handling for the build run
//!
//! Every event is forwarded to tracing at the level the event declares. In
//! text mode the notable ones are also printed for the user.

use crate::display::OutputRenderer;
use console::{Style, Term};
use elasi_events::{AppEvent, BuildEvent, GeneralEvent};
use tracing::{debug, error, info, trace, warn, Level};

/// Event handler for user feedback
pub struct EventHandler {
    /// Output renderer
    renderer: OutputRenderer,
    /// Show per-step progress and converter output
    verbose: bool,
    /// Status and warning lines go to stderr so stdout stays parseable
    term: Term,
}

impl EventHandler {
    pub fn new(renderer: OutputRenderer, verbose: bool) -> Self {
        Self {
            renderer,
            verbose,
            term: Term::stderr(),
        }
    }

    /// Handle incoming event
    pub fn handle_event(&mut self, event: AppEvent) {
        log_event(&event);

        if self.renderer.is_json() {
            return;
        }

        match event {
            AppEvent::General(general) => self.handle_general_event(general),
            AppEvent::Build(build) => self.handle_build_event(build),
        }
    }

    fn handle_general_event(&self, event: GeneralEvent) {
        match event {
            GeneralEvent::Warning { message, context } => {
                let style = Style::new().yellow();
                match context {
                    Some(context) => {
                        self.show_status(&format!("{} {message} ({context})", style.apply_to("Warning:")));
                    }
                    None => self.show_status(&format!("{} {message}", style.apply_to("Warning:"))),
                }
            }
            GeneralEvent::DebugLog { message, .. } => {
                if self.verbose {
                    self.show_status(&Style::new().dim().apply_to(message).to_string());
                }
            }
        }
    }

    fn handle_build_event(&self, event: BuildEvent) {
        let dim = Style::new().dim();
        match event {
            BuildEvent::StepStarted { step } if self.verbose => {
                self.show_status(&dim.apply_to(format!("==> {step}")).to_string());
            }
            BuildEvent::ConverterStarted { program, args } => {
                self.show_status(&format!(
                    "Running {} {}",
                    program.display(),
                    args.join(" ")
                ));
            }
            BuildEvent::ConverterOutput { text, .. } => {
                for line in text.lines() {
                    self.show_status(&dim.apply_to(format!("  | {line}")).to_string());
                }
            }
            BuildEvent::ImportOverwritten {
                specifier,
                previous,
                current,
            } => {
                self.show_status(&format!(
                    "{} import {specifier} remapped from {previous} to {current}",
                    Style::new().yellow().apply_to("Warning:")
                ));
            }
            BuildEvent::ManifestWritten { path, entries } => {
                self.show_status(&format!("Wrote {} ({entries} entries)", path.display()));
            }
            // Failures are reported once by main; the rest are log-only
            _ => {}
        }
    }

    fn show_status(&self, message: &str) {
        self.term.write_line(message).unwrap_or(());
    }
}

/// Forward an event to tracing with its declared level
fn log_event(event: &AppEvent) {
    let domain = event.log_target();
    let level = event.log_level();
    let payload = serde_json::to_string(event).unwrap_or_default();

    if level == Level::ERROR {
        error!(domain, event = %payload, "build event");
    } else if level == Level::WARN {
        warn!(domain, event = %payload, "build event");
    } else if level == Level::INFO {
        info!(domain, event = %payload, "build event");
    } else if level == Level::DEBUG {
        debug!(domain, event = %payload, "build event");
    } else {
        trace!(domain, event = %payload, "build event");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ColorChoice;
    use elasi_events::BuildStep;
    use std::path::PathBuf;

    #[test]
    fn handles_every_build_event_without_panicking() {
        let renderer = OutputRenderer::new(false, ColorChoice::Never);
        let mut handler = EventHandler::new(renderer, true);

        handler.handle_event(AppEvent::Build(BuildEvent::StepStarted {
            step: BuildStep::RunConverter,
        }));
        handler.handle_event(AppEvent::Build(BuildEvent::ConverterStarted {
            program: PathBuf::from("node_modules/.bin/mz"),
            args: vec!["--prepend=/*! */".to_string(), "-ruben".to_string()],
        }));
        handler.handle_event(AppEvent::Build(BuildEvent::ConverterOutput {
            stream: "stdout".to_string(),
            text: "converted 3 files\ndone".to_string(),
        }));
        handler.handle_event(AppEvent::Build(BuildEvent::ImportOverwritten {
            specifier: "elasi/core".to_string(),
            previous: "/elasi/core.js".to_string(),
            current: "/elasi/core2.js".to_string(),
        }));
        handler.handle_event(AppEvent::General(GeneralEvent::warning_with_context(
            "version is not semver",
            "1.x",
        )));
    }

    #[test]
    fn json_mode_prints_nothing() {
        let renderer = OutputRenderer::new(true, ColorChoice::Never);
        let mut handler = EventHandler::new(renderer, false);
        handler.handle_event(AppEvent::General(GeneralEvent::warning("ignored in json mode")));
    }
}
