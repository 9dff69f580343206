use std::path::{Path, PathBuf};
use clap::Parser;
use crate::config::locator_config::{InputFormat, LocatorConfig};

/// Reads wind farms (`n` then `n` lines of `x y premium`) and prints the total
/// connection cost of a control center at their coordinate-wise median.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, help = "Read wind farms from this file instead of stdin")]
    input: Option<PathBuf>,

    #[arg(long, default_value = "plain", help = "Input format: plain or csv")]
    format: InputFormat,

    #[arg(long, help = "Write a per-farm cost breakdown CSV")]
    breakdown: Option<PathBuf>,

    #[arg(long, help = "Write a JSON placement report")]
    report: Option<PathBuf>,

    #[arg(long, default_value_t = false, help = "Print a placement summary to stderr")]
    summary: bool,

    #[arg(long, default_value_t = false)]
    enable_timing: bool,

    #[arg(long, default_value_t = false)]
    debug_logging: bool,
}

impl Args {
    pub fn input(&self) -> Option<&Path> {
        self.input.as_deref()
    }

    pub fn format(&self) -> InputFormat {
        self.format
    }

    pub fn breakdown(&self) -> Option<&Path> {
        self.breakdown.as_deref()
    }

    pub fn report(&self) -> Option<&Path> {
        self.report.as_deref()
    }

    pub fn summary(&self) -> bool {
        self.summary
    }

    pub fn enable_timing(&self) -> bool {
        self.enable_timing
    }

    pub fn debug_logging(&self) -> bool {
        self.debug_logging
    }
}

impl From<&Args> for LocatorConfig {
    fn from(args: &Args) -> Self {
        Self {
            input_path: args.input().map(Path::to_path_buf),
            input_format: args.format(),
            breakdown_path: args.breakdown().map(Path::to_path_buf),
            report_path: args.report().map(Path::to_path_buf),
            print_summary: args.summary(),
            enable_timing: args.enable_timing(),
            debug_logging: args.debug_logging(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_flags_gives_default_config() {
        let args = Args::try_parse_from(["windhub"]).unwrap();
        let config = LocatorConfig::from(&args);
        assert!(config.input_path.is_none());
        assert_eq!(config.input_format, InputFormat::Plain);
        assert!(config.is_plain_run());
    }

    #[test]
    fn flags_flow_into_config() {
        let args = Args::try_parse_from([
            "windhub", "--input", "farms.csv", "--format", "csv",
            "--breakdown", "out.csv", "--summary", "--debug-logging",
        ]).unwrap();
        let config = LocatorConfig::from(&args);
        assert_eq!(config.input_path, Some(PathBuf::from("farms.csv")));
        assert_eq!(config.input_format, InputFormat::Csv);
        assert_eq!(config.breakdown_path, Some(PathBuf::from("out.csv")));
        assert!(config.print_summary);
        assert!(config.debug_logging);
        assert!(!config.is_plain_run());
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Args::try_parse_from(["windhub", "--format", "xml"]).is_err());
    }
}
