//! Result-folder discovery and data extraction.
//!
//! Everything here reads from disk once and hands back owned, immutable
//! values for the rest of the pipeline.

mod loader;
mod locate;
mod series;
mod trades;

pub use loader::{
    find_order_events_file, find_results_file, load_order_events, load_results, ResultsFile,
};
pub use locate::ResultsDirectory;
pub use series::{
    extract_drawdown, extract_equity, DRAWDOWN_CHART, DRAWDOWN_SERIES, EQUITY_CHART,
    EQUITY_SERIES,
};
pub use trades::{filter_filled, into_trades};
