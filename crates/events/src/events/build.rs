use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::FailureContext;

/// Steps of one build run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildStep {
    PrepareOutput,
    LoadMetadata,
    RenderHeader,
    RunConverter,
    BuildImportMap,
    WriteManifest,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PrepareOutput => "prepare output directory",
            Self::LoadMetadata => "load package metadata",
            Self::RenderHeader => "render copyright header",
            Self::RunConverter => "run converter",
            Self::BuildImportMap => "build import map",
            Self::WriteManifest => "write import map",
        };
        f.write_str(name)
    }
}

/// Build-specific events for the event system
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BuildEvent {
    /// Build run started
    Started { root: PathBuf },

    /// A pipeline step began
    StepStarted { step: BuildStep },

    /// A pipeline step finished successfully
    StepCompleted { step: BuildStep },

    /// Package metadata loaded
    MetadataLoaded {
        version: String,
        exports: usize,
    },

    /// Converter process launched
    ConverterStarted {
        program: PathBuf,
        args: Vec<String>,
    },

    /// Captured converter output
    ConverterOutput { stream: String, text: String },

    /// Converter process exited successfully
    ConverterCompleted { duration: Duration },

    /// A later export replaced an earlier one under the same specifier
    ImportOverwritten {
        specifier: String,
        previous: String,
        current: String,
    },

    /// Import-map template written
    ManifestWritten { path: PathBuf, entries: usize },

    /// Build run completed
    Completed { version: String, duration: Duration },

    /// Build run failed
    Failed {
        step: Option<BuildStep>,
        failure: FailureContext,
    },
}
