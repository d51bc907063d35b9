//! Configuration structures.

use report_charts::ChartDimensions;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main report configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    #[serde(default)]
    pub results: ResultsSettings,
    #[serde(default)]
    pub charts: ChartDimensions,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where run folders are read from and what the report is called.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsSettings {
    pub directory: PathBuf,
    pub output_file: String,
}

impl Default for ResultsSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("Results"),
            output_file: "report.html".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, LogFormat::Json)
    }
}
