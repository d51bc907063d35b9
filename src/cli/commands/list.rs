//! List run folders command.

use anyhow::{Context, Result};
use report_config::ReportConfig;
use report_core::parse_folder_name;
use report_data::ResultsDirectory;

use crate::cli::Cli;

pub fn run(cli: &Cli, config: &ReportConfig) -> Result<()> {
    let results = ResultsDirectory::new(cli.results_dir(config));
    let folders = results
        .run_folders()
        .context("Failed to list run folders")?;

    println!("Run folders in {}", results.root().display());
    println!("═══════════════════════════════════════════════════════════");

    for folder in &folders {
        let Some(name) = folder.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let run_time = parse_folder_name(name).and_then(|stamped| stamped.run_time_display());
        match run_time {
            Some(run_time) => println!("  {:<40} {}", name, run_time),
            None => println!("  {}", name),
        }
    }

    println!();
    println!("{} folder(s). Pass a folder name to report on it.", folders.len());

    Ok(())
}
