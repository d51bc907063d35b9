//! Error types for the report pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level report error. Every variant is fatal for the run.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing chart series: charts[\"{chart}\"].series[\"{series}\"]")]
    Schema { chart: String, series: String },

    #[error("Chart rendering failed: {0}")]
    Chart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Something the run needs is not on disk.
#[derive(Error, Debug)]
pub enum NotFoundError {
    #[error("Results directory not found: {}", .0.display())]
    ResultsDirectory(PathBuf),

    #[error("No backtest folders found in {}", .0.display())]
    NoRunFolders(PathBuf),

    #[error("Folder not found: {}", .folder.display())]
    RunFolder {
        folder: PathBuf,
        available: Vec<String>,
    },

    #[error("No JSON file found in {}", .0.display())]
    ResultsFile(PathBuf),
}

/// The order-events log could not be used. Never fatal: the report renders
/// with an empty trade ledger instead.
#[derive(Error, Debug)]
pub enum OrderEventsUnavailable {
    #[error("No order events file found in {}", .0.display())]
    Missing(PathBuf),

    #[error("Could not read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A filled order event that lacks a field the trade ledger needs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Filled order {} is missing `{field}`", .order_id.map_or_else(|| "?".to_string(), |id| id.to_string()))]
pub struct IncompleteFill {
    pub order_id: Option<i64>,
    pub field: &'static str,
}

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
