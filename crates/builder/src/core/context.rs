//! Build context for one orchestrator run

use chrono::Datelike;
use elasi_config::{Config, ProjectLayout};
use elasi_events::{EventEmitter, EventSender};
use std::path::PathBuf;

/// Everything one build run needs to know about its project
#[derive(Clone, Debug)]
pub struct BuildContext {
    /// Resolved project paths
    pub layout: ProjectLayout,
    /// Effective configuration
    pub config: Config,
    /// Year rendered into the copyright header
    pub year: i32,
    /// Event sender for progress reporting
    pub event_sender: Option<EventSender>,
}

impl EventEmitter for BuildContext {
    fn event_sender(&self) -> Option<&EventSender> {
        self.event_sender.as_ref()
    }
}

impl BuildContext {
    /// Create new build context
    ///
    /// The year comes from `config.build.year` when pinned, otherwise from
    /// the local clock.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        let layout = ProjectLayout::new(root, &config);
        let year = config.build.year.unwrap_or_else(current_year);
        Self {
            layout,
            config,
            year,
            event_sender: None,
        }
    }

    /// Set event sender
    #[must_use]
    pub fn with_event_sender(mut self, event_sender: EventSender) -> Self {
        self.event_sender = Some(event_sender);
        self
    }

    /// Override the header year
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }
}

/// Current calendar year from the local clock
#[must_use]
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}
