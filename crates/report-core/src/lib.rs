//! Core types and errors for backtest reports.
//!
//! This crate provides the building blocks shared by every stage of the
//! report pipeline:
//! - The loaded result document (`BacktestResult`) and its chart series
//! - Order events and the filled `Trade` view of them
//! - The run-folder name parser (`{Strategy}-{YYYYMMDD}-{HHMMSS}`)
//! - The error taxonomy for fatal and degraded paths

pub mod error;
pub mod folder;
pub mod types;

pub use error::{IncompleteFill, NotFoundError, OrderEventsUnavailable, ReportError, ReportResult};
pub use folder::{parse_folder_name, strategy_name_from_folder, StampedFolderName};
pub use types::*;
