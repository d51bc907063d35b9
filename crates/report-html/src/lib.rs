//! HTML report composition.
//!
//! Merges the loaded result, rendered charts, formatted statistics and the
//! trade ledger into one self-contained HTML document.

mod compose;
mod context;
mod summary;

pub use compose::{compose, write_report, ComposeError, ReportInputs};
pub use context::{backtest_period, resolve_run_time, resolve_strategy_name, NOT_AVAILABLE};
pub use summary::console_summary;
