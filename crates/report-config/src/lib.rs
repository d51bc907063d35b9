//! Configuration management.

mod settings;

pub use settings::{LogFormat, LoggingConfig, ReportConfig, ResultsSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Used when no `--config` is given. The file is optional.
pub const DEFAULT_CONFIG_PATH: &str = "config/report.toml";

const ENV_PREFIX: &str = "BACKTEST_REPORT";

/// Load configuration from file and environment.
///
/// An explicit `path` must exist; without one, `config/report.toml` is read
/// when present. Environment variables such as
/// `BACKTEST_REPORT__RESULTS__DIRECTORY` override the file.
pub fn load_config(path: Option<&Path>) -> Result<ReportConfig, ConfigError> {
    load_with_prefix(path, ENV_PREFIX)
}

fn load_with_prefix(path: Option<&Path>, prefix: &str) -> Result<ReportConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(
            Environment::with_prefix(prefix)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_file() {
        let config = load_with_prefix(None, "BACKTEST_REPORT_TEST_DEFAULTS").unwrap();
        assert_eq!(config.results.directory, PathBuf::from("Results"));
        assert_eq!(config.results.output_file, "report.html");
        assert_eq!(config.charts.width, 1200);
        assert_eq!(config.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn test_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.toml");
        fs::write(
            &path,
            r#"
[results]
directory = "/data/Results"

[charts]
drawdown_height = 300

[logging]
level = "debug"
format = "json"
"#,
        )
        .unwrap();

        let config = load_with_prefix(Some(&path), "BACKTEST_REPORT_TEST_FILE").unwrap();
        assert_eq!(config.results.directory, PathBuf::from("/data/Results"));
        assert_eq!(config.results.output_file, "report.html");
        assert_eq!(config.charts.drawdown_height, 300);
        assert_eq!(config.charts.equity_height, 600);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.format.is_json());
    }

    #[test]
    fn test_environment_overrides() {
        std::env::set_var("BACKTEST_REPORT_TEST_ENV__RESULTS__OUTPUT_FILE", "summary.html");
        std::env::set_var("BACKTEST_REPORT_TEST_ENV__CHARTS__WIDTH", "800");

        let config = load_with_prefix(None, "BACKTEST_REPORT_TEST_ENV").unwrap();
        assert_eq!(config.results.output_file, "summary.html");
        assert_eq!(config.charts.width, 800);
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_with_prefix(Some(&missing), "BACKTEST_REPORT_TEST_MISSING").is_err());
    }

    #[test]
    fn test_serializes_to_toml() {
        let text = toml::to_string(&ReportConfig::default()).unwrap();
        assert!(text.contains("[results]"));
        assert!(text.contains("output_file = \"report.html\""));
    }
}
