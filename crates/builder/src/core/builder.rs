//! High-level build orchestration

use super::context::BuildContext;
use crate::converter::Converter;
use crate::header::{load_header_template, render_copyright_header};
use crate::import_map::{build_import_map, write_import_map};
use crate::metadata::load_package_metadata;
use elasi_config::constants::DIST_DIR_MODE;
use elasi_errors::Error;
use elasi_events::{AppEvent, BuildEvent, BuildStep, EventEmitter, FailureContext};
use elasi_platform::fs::{self, DirStatus};
use elasi_platform::Platform;
use elasi_types::BuildReport;
use std::time::{Duration, Instant};

/// Runs the build pipeline against one project
#[derive(Clone)]
pub struct Builder {
    platform: Platform,
}

impl Builder {
    /// Create new builder for the host platform
    #[must_use]
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }

    /// Create builder with a specific platform implementation
    #[must_use]
    pub fn with_platform(platform: Platform) -> Self {
        Self { platform }
    }

    /// Run the whole pipeline once.
    ///
    /// Steps run strictly in order and each is attempted exactly once. The
    /// import-map template is only written after the converter succeeds.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step:
    /// - The dist directory cannot be created (other than already existing)
    /// - `package.json` or the header template is missing or malformed
    /// - The converter cannot be spawned, exits non-zero or times out
    /// - The import-map template cannot be written
    pub async fn build(&self, ctx: &BuildContext) -> Result<BuildReport, Error> {
        let start = Instant::now();
        ctx.emit(AppEvent::Build(BuildEvent::Started {
            root: ctx.layout.root().to_path_buf(),
        }));

        let mut current = None;
        match self.run_steps(ctx, &mut current).await {
            Ok(report) => {
                ctx.emit(AppEvent::Build(BuildEvent::Completed {
                    version: report.version.clone(),
                    duration: start.elapsed(),
                }));
                Ok(report)
            }
            Err(e) => {
                if current == Some(BuildStep::WriteManifest) {
                    tracing::warn!(
                        manifest = %ctx.layout.manifest_path().display(),
                        "sources were converted but the import map was not written"
                    );
                }
                ctx.emit(AppEvent::Build(BuildEvent::Failed {
                    step: current,
                    failure: FailureContext::from_error(&e),
                }));
                Err(e)
            }
        }
    }

    async fn run_steps(
        &self,
        ctx: &BuildContext,
        current: &mut Option<BuildStep>,
    ) -> Result<BuildReport, Error> {
        begin(ctx, current, BuildStep::PrepareOutput);
        let dist = ctx.layout.dist_dir();
        if fs::ensure_dir(&dist, DIST_DIR_MODE).await? == DirStatus::AlreadyExisted {
            tracing::debug!(path = %dist.display(), "dist directory already exists");
        }
        ctx.emit_step_completed(BuildStep::PrepareOutput);

        begin(ctx, current, BuildStep::LoadMetadata);
        let metadata = load_package_metadata(&ctx.layout.package_json()).await?;
        let exports = metadata.export_entries()?;
        if metadata.semver().is_none() {
            ctx.emit_warning_with_context(
                format!("package version {:?} is not a semantic version", metadata.version),
                "the header is rendered with it unchanged",
            );
        }
        ctx.emit(AppEvent::Build(BuildEvent::MetadataLoaded {
            version: metadata.version.clone(),
            exports: exports.len(),
        }));
        ctx.emit_step_completed(BuildStep::LoadMetadata);

        begin(ctx, current, BuildStep::RenderHeader);
        let template = load_header_template(&ctx.layout.copyright_header()).await?;
        let header = render_copyright_header(&template, &metadata.version, ctx.year);
        ctx.emit_step_completed(BuildStep::RenderHeader);

        begin(ctx, current, BuildStep::RunConverter);
        let converter_duration = Converter::from_context(ctx)
            .run(&self.platform, ctx, &header)
            .await?;
        ctx.emit_step_completed(BuildStep::RunConverter);

        begin(ctx, current, BuildStep::BuildImportMap);
        let imports = build_import_map(&exports, &ctx.config.manifest, ctx);
        ctx.emit_step_completed(BuildStep::BuildImportMap);

        begin(ctx, current, BuildStep::WriteManifest);
        let manifest_path = ctx.layout.manifest_path();
        let template = write_import_map(&manifest_path, imports).await?;
        let entries = template.imports.len();
        ctx.emit(AppEvent::Build(BuildEvent::ManifestWritten {
            path: manifest_path.clone(),
            entries,
        }));
        ctx.emit_step_completed(BuildStep::WriteManifest);

        Ok(BuildReport {
            version: metadata.version,
            year: ctx.year,
            manifest_path,
            entries,
            converter_duration_ms: duration_to_millis(converter_duration),
        })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

fn begin(ctx: &BuildContext, current: &mut Option<BuildStep>, step: BuildStep) {
    *current = Some(step);
    ctx.emit_step_started(step);
}

fn duration_to_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
