//! Loading the results document and the order-events log.

use report_core::{
    strategy_name_from_folder, BacktestResult, NotFoundError, OrderEvent,
    OrderEventsUnavailable, ReportError, ReportResult,
};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::locate::folder_name;

const ORDER_EVENTS_SUFFIX: &str = "-order-events.json";

/// The primary results file chosen for a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsFile {
    pub path: PathBuf,
    /// Name the loader looked for first.
    pub expected_name: String,
    /// True when `expected_name` was absent and another JSON file was used.
    pub fallback: bool,
}

/// Find the results JSON in a run folder.
///
/// Prefers `{StrategyName}.json`; otherwise takes the first `.json` file by
/// name, never an order-events log.
pub fn find_results_file(folder: &Path) -> ReportResult<ResultsFile> {
    let strategy = strategy_name_from_folder(&folder_name(folder).unwrap_or_default());
    let expected_name = format!("{strategy}.json");

    let expected = folder.join(&expected_name);
    if expected.is_file() {
        return Ok(ResultsFile {
            path: expected,
            expected_name,
            fallback: false,
        });
    }

    let candidate = json_files(folder)?
        .into_iter()
        .find(|path| !is_order_events_file(path))
        .ok_or_else(|| NotFoundError::ResultsFile(folder.to_path_buf()))?;

    Ok(ResultsFile {
        path: candidate,
        expected_name,
        fallback: true,
    })
}

/// Parse a results JSON file.
pub fn load_results(path: &Path) -> ReportResult<BacktestResult> {
    let file = File::open(path)?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| ReportError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Find the order-events log in a run folder.
///
/// Prefers `{StrategyName}-order-events.json`, then any
/// `*-order-events.json` by name.
pub fn find_order_events_file(folder: &Path) -> Option<PathBuf> {
    let strategy = strategy_name_from_folder(&folder_name(folder).unwrap_or_default());
    let expected = folder.join(format!("{strategy}{ORDER_EVENTS_SUFFIX}"));
    if expected.is_file() {
        return Some(expected);
    }

    json_files(folder)
        .ok()?
        .into_iter()
        .find(|path| is_order_events_file(path))
}

/// Load every order event of a run folder.
///
/// A missing or malformed log is reported as `OrderEventsUnavailable`; the
/// caller decides how to degrade.
pub fn load_order_events(folder: &Path) -> Result<Vec<OrderEvent>, OrderEventsUnavailable> {
    let path = find_order_events_file(folder)
        .ok_or_else(|| OrderEventsUnavailable::Missing(folder.to_path_buf()))?;
    debug!("Reading order events from {}", path.display());

    let file = File::open(&path).map_err(|source| OrderEventsUnavailable::Io {
        path: path.clone(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file))
        .map_err(|source| OrderEventsUnavailable::Parse { path, source })
}

/// `.json` files directly inside `folder`, sorted by file name.
fn json_files(folder: &Path) -> ReportResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(folder)? {
        let path = entry?.path();
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn is_order_events_file(path: &Path) -> bool {
    folder_name(path).is_some_and(|name| name.ends_with(ORDER_EVENTS_SUFFIX))
}
