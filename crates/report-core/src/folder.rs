//! Run-folder name parsing.
//!
//! Result folders are named `{StrategyName}-{YYYYMMDD}-{HHMMSS}`. The loader
//! uses the strategy part to find `{StrategyName}.json`; the composer uses
//! both parts for the report header.

use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::OnceLock;

/// Display format for run timestamps.
pub const RUN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn stamp_suffix() -> &'static Regex {
    static SUFFIX: OnceLock<Regex> = OnceLock::new();
    SUFFIX.get_or_init(|| {
        Regex::new(r"-([0-9]{8})-([0-9]{6})$").expect("folder suffix pattern is valid")
    })
}

/// A folder name that carries the `-{YYYYMMDD}-{HHMMSS}` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampedFolderName {
    /// Folder name with the suffix removed (may be empty).
    pub strategy_name: String,
    /// `None` when the digits do not form a real calendar date/time.
    pub run_timestamp: Option<NaiveDateTime>,
}

impl StampedFolderName {
    /// Run timestamp formatted for display.
    pub fn run_time_display(&self) -> Option<String> {
        self.run_timestamp
            .map(|ts| ts.format(RUN_TIMESTAMP_FORMAT).to_string())
    }
}

/// Parse a run-folder name. Returns `None` when the suffix is absent.
pub fn parse_folder_name(name: &str) -> Option<StampedFolderName> {
    let caps = stamp_suffix().captures(name)?;
    let whole = caps.get(0)?;
    let stamp = format!("{}{}", &caps[1], &caps[2]);

    Some(StampedFolderName {
        strategy_name: name[..whole.start()].to_string(),
        run_timestamp: NaiveDateTime::parse_from_str(&stamp, "%Y%m%d%H%M%S").ok(),
    })
}

/// Strategy name implied by a folder name: the name without its timestamp
/// suffix, or the whole name when there is no suffix.
pub fn strategy_name_from_folder(name: &str) -> String {
    match parse_folder_name(name) {
        Some(stamped) => stamped.strategy_name,
        None => name.to_string(),
    }
}
