use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum InputFormat {
    /// `n` followed by `n` whitespace-separated `x y premium` triples
    #[default]
    Plain,
    /// Headered CSV with columns `x,y,premium`
    Csv,
}

impl FromStr for InputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(InputFormat::Plain),
            "csv" => Ok(InputFormat::Csv),
            _ => Err(format!("Unknown input format: {} (expected plain or csv)", s)),
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InputFormat::Plain => write!(f, "plain"),
            InputFormat::Csv => write!(f, "csv"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LocatorConfig {
    pub input_path: Option<PathBuf>, // None reads stdin
    pub input_format: InputFormat,
    pub breakdown_path: Option<PathBuf>,
    pub report_path: Option<PathBuf>,
    pub print_summary: bool,
    pub enable_timing: bool,
    pub debug_logging: bool,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            input_path: None,
            input_format: InputFormat::Plain,
            breakdown_path: None,
            report_path: None,
            print_summary: false,
            enable_timing: false,
            debug_logging: false,
        }
    }
}

impl LocatorConfig {
    /// True when nothing beyond the cost line is requested.
    pub fn is_plain_run(&self) -> bool {
        self.breakdown_path.is_none() && self.report_path.is_none() && !self.print_summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reads_plain_stdin() {
        let config = LocatorConfig::default();
        assert!(config.input_path.is_none());
        assert_eq!(config.input_format, InputFormat::Plain);
        assert!(config.is_plain_run());
    }

    #[test]
    fn format_parsing_is_case_insensitive() {
        assert_eq!("CSV".parse::<InputFormat>(), Ok(InputFormat::Csv));
        assert_eq!("plain".parse::<InputFormat>(), Ok(InputFormat::Plain));
        assert!("json".parse::<InputFormat>().is_err());
        assert_eq!(InputFormat::Csv.to_string(), "csv");
    }
}
