//! Results directory scanning.

use report_core::{NotFoundError, ReportResult};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

/// The directory that holds one subfolder per backtest run.
#[derive(Debug, Clone)]
pub struct ResultsDirectory {
    root: PathBuf,
}

impl ResultsDirectory {
    /// Create a handle. Nothing is read until a lookup is made.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// All run folders, sorted by name.
    pub fn run_folders(&self) -> ReportResult<Vec<PathBuf>> {
        let mut folders = self.subfolders()?;
        folders.sort();
        Ok(folders)
    }

    /// The most recently modified run folder.
    pub fn most_recent(&self) -> ReportResult<PathBuf> {
        let mut folders: Vec<(SystemTime, PathBuf)> = self
            .subfolders()?
            .into_iter()
            .map(|path| {
                let modified = fs::metadata(&path)
                    .and_then(|m| m.modified())
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                (modified, path)
            })
            .collect();

        // Newest first; ties broken by name so the choice is stable.
        folders.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

        folders
            .into_iter()
            .next()
            .map(|(_, path)| path)
            .ok_or_else(|| NotFoundError::NoRunFolders(self.root.clone()).into())
    }

    /// A run folder by name. The name must be a single path component
    /// directly below the root.
    pub fn named(&self, name: &str) -> ReportResult<PathBuf> {
        let folder = self.root.join(name);
        if is_plain_name(name) && folder.is_dir() {
            return Ok(folder);
        }

        let available = self
            .run_folders()
            .map(|folders| folders.iter().filter_map(|f| folder_name(f)).collect())
            .unwrap_or_default();

        Err(NotFoundError::RunFolder { folder, available }.into())
    }

    fn subfolders(&self) -> ReportResult<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(NotFoundError::ResultsDirectory(self.root.clone()).into());
        }

        let mut folders = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.is_dir() {
                folders.push(path);
            }
        }
        Ok(folders)
    }
}

/// True for a single normal component: not empty, `.`, `..` or a nested path.
fn is_plain_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Final path component as an owned string.
pub(crate) fn folder_name(path: &Path) -> Option<String> {
    path.file_name().map(|n| n.to_string_lossy().into_owned())
}
