//! Output rendering and formatting

use crate::cli::ColorChoice;
use crate::error::CliError;
use console::{Style, Term};
use elasi_types::BuildReport;
use std::io;

/// Output renderer for CLI results
#[derive(Clone)]
pub struct OutputRenderer {
    /// Use JSON output format
    json_output: bool,
    /// Terminal instance
    term: Term,
}

impl OutputRenderer {
    /// Create new output renderer
    pub fn new(json_output: bool, color_choice: ColorChoice) -> Self {
        match color_choice {
            ColorChoice::Always => {
                console::set_colors_enabled(true);
                console::set_colors_enabled_stderr(true);
            }
            ColorChoice::Never => {
                console::set_colors_enabled(false);
                console::set_colors_enabled_stderr(false);
            }
            ColorChoice::Auto => {}
        }

        Self {
            json_output,
            term: Term::stdout(),
        }
    }

    pub fn is_json(&self) -> bool {
        self.json_output
    }

    /// Announce the start of a build
    pub fn render_banner(&self) -> io::Result<()> {
        if self.json_output {
            return Ok(());
        }
        let style = Style::new().bold();
        self.term
            .write_line(&style.apply_to("*** Building ELASI ***").to_string())
    }

    /// Render the result of a successful build
    pub fn render_build_report(&self, report: &BuildReport) -> io::Result<()> {
        if self.json_output {
            let json = serde_json::to_string_pretty(report).map_err(io::Error::other)?;
            return self.term.write_line(&json);
        }

        let label = Style::new().dim();
        self.term.write_line(&format!(
            "{} {}",
            label.apply_to("Version:    "),
            report.version
        ))?;
        self.term.write_line(&format!(
            "{} {}",
            label.apply_to("Import map: "),
            report.manifest_path.display()
        ))?;
        self.term.write_line(&format!(
            "{} {}",
            label.apply_to("Entries:    "),
            report.entries
        ))?;
        self.term.write_line(&format!(
            "{} {}ms",
            label.apply_to("Converter:  "),
            report.converter_duration_ms
        ))?;
        self.term
            .write_line(&Style::new().green().bold().apply_to("Complete.").to_string())
    }

    /// Render a failure in JSON mode; text mode reports through stderr in `main`
    pub fn render_failure(&self, error: &CliError) -> io::Result<()> {
        if !self.json_output {
            return Ok(());
        }
        let value = serde_json::json!({
            "error": {
                "code": error.code(),
                "message": error.to_string(),
            }
        });
        let json = serde_json::to_string_pretty(&value).map_err(io::Error::other)?;
        self.term.write_line(&json)
    }
}
