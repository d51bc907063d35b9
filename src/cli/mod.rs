//! CLI definitions.

pub mod commands;

use clap::{Parser, ValueEnum};
use report_config::ReportConfig;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "backtest-report")]
#[command(author, version, about = "Generate a static HTML report from a backtest results folder")]
pub struct Cli {
    /// Run folder inside the results directory (defaults to the most recent)
    pub folder: Option<String>,

    /// Directory holding one folder per backtest run
    #[arg(short, long)]
    pub results_dir: Option<PathBuf>,

    /// Report output path (defaults to report.html inside the run folder)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    /// List available run folders and exit
    #[arg(long)]
    pub list: bool,
}

impl Cli {
    /// Results directory from the command line, else from configuration.
    pub fn results_dir(&self, config: &ReportConfig) -> PathBuf {
        self.results_dir
            .clone()
            .unwrap_or_else(|| config.results.directory.clone())
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["backtest-report"]).unwrap();
        assert!(cli.folder.is_none());
        assert!(cli.log_level.is_none());
        assert!(!cli.list);
        assert_eq!(
            cli.results_dir(&ReportConfig::default()),
            PathBuf::from("Results")
        );
    }

    #[test]
    fn test_folder_and_overrides() {
        let cli = Cli::try_parse_from([
            "backtest-report",
            "BuyAndHold-20260101-220149",
            "-r",
            "/data/Results",
            "-o",
            "out.html",
            "-l",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.folder.as_deref(), Some("BuyAndHold-20260101-220149"));
        assert_eq!(
            cli.results_dir(&ReportConfig::default()),
            PathBuf::from("/data/Results")
        );
        assert_eq!(cli.output, Some(PathBuf::from("out.html")));
        assert_eq!(cli.log_level.map(LogLevel::as_str), Some("debug"));
    }

    #[test]
    fn test_rejects_second_folder() {
        assert!(Cli::try_parse_from(["backtest-report", "a", "b"]).is_err());
    }
}
