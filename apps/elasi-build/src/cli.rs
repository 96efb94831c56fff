//! Command line interface definition

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// elasi-build - Build the ELASI ES module distribution
#[derive(Parser, Debug)]
#[command(name = "elasi-build")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Build the ELASI ES module distribution and its import-map template")]
#[command(long_about = None)]
pub struct Cli {
    /// Project root containing package.json
    #[arg(long, env = "ELASI_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Converter executable (default: <root>/node_modules/.bin/mz)
    #[arg(long, value_name = "PATH")]
    pub converter: Option<PathBuf>,

    /// Year rendered into the copyright header
    #[arg(long, value_name = "YYYY", value_parser = parse_year_arg)]
    pub year: Option<i32>,

    /// Abort the converter after this many seconds (0 disables)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Output and configuration flags
#[derive(Parser, Debug)]
pub struct GlobalArgs {
    /// Output the build report in JSON format
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,

    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Use alternate config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Color output mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Always,
    Auto,
    Never,
}

fn parse_year_arg(value: &str) -> Result<i32, String> {
    elasi_config::parse_year(value).ok_or_else(|| format!("expected a four-digit year, got '{value}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let cli = Cli::try_parse_from(["elasi-build"]).unwrap();
        assert!(cli.converter.is_none());
        assert!(cli.year.is_none());
        assert!(!cli.global.json);
        assert_eq!(cli.global.color, ColorChoice::Auto);
    }

    #[test]
    fn parses_overrides() {
        let cli = Cli::try_parse_from([
            "elasi-build",
            "--root",
            "/srv/elasi",
            "--converter",
            "/usr/bin/mz",
            "--year",
            "2031",
            "--timeout",
            "30",
            "--json",
            "--color",
            "never",
        ])
        .unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/elasi")));
        assert_eq!(cli.converter, Some(PathBuf::from("/usr/bin/mz")));
        assert_eq!(cli.year, Some(2031));
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.global.json);
        assert_eq!(cli.global.color, ColorChoice::Never);
    }

    #[test]
    fn rejects_malformed_year() {
        assert!(Cli::try_parse_from(["elasi-build", "--year", "24"]).is_err());
    }
}
