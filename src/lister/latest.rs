//! Latest-file-per-module enumeration for patch/archive package layouts.

use crate::error::ChecksumError;
use crate::lister::{FileLister, FullDirectoryLister};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Default name of the subdirectory whose files are all included.
pub const DEFAULT_PATCH_DIR: &str = "patch";

/// Default name of the subdirectory holding one module per child directory.
pub const DEFAULT_ARCHIVE_DIR: &str = "archive";

/// Enumerates every file under the patch area, plus the most recently
/// modified file of each module directory in the archive area.
///
/// A module directory is an immediate child of the archive area. When two
/// candidates in a module share a modification time, the greater filename
/// (byte-wise) wins, so selection stays deterministic. Missing patch or
/// archive directories contribute nothing.
pub struct LatestPerModuleLister {
    patch_dir: String,
    archive_dir: String,
}

impl LatestPerModuleLister {
    pub fn new(patch_dir: impl Into<String>, archive_dir: impl Into<String>) -> Self {
        Self {
            patch_dir: patch_dir.into(),
            archive_dir: archive_dir.into(),
        }
    }
}

impl Default for LatestPerModuleLister {
    fn default() -> Self {
        Self::new(DEFAULT_PATCH_DIR, DEFAULT_ARCHIVE_DIR)
    }
}

impl FileLister for LatestPerModuleLister {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, ChecksumError> {
        let mut files = Vec::new();

        let patch_root = root.join(&self.patch_dir);
        if patch_root.is_dir() {
            files.extend(FullDirectoryLister.list(&patch_root)?);
        }

        let archive_root = root.join(&self.archive_dir);
        if archive_root.is_dir() {
            let mut modules = subdirectories(&archive_root)?;
            modules.sort();
            for module in modules {
                if let Some(latest) = latest_file(&module)? {
                    files.push(latest);
                }
            }
        }

        Ok(files)
    }
}

/// Immediate child directories, with access-denied treated as empty.
fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>, ChecksumError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %dir.display(), "Access denied, treating directory as empty");
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    Ok(dirs)
}

/// The file in `dir` (non-recursive) with the greatest modification time.
///
/// Ties fall to the greater path so repeated runs agree.
fn latest_file(dir: &Path) -> Result<Option<PathBuf>, ChecksumError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            debug!(path = %dir.display(), "Access denied, treating module as empty");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let mut best: Option<(SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        let candidate = (modified, entry.path());
        match &best {
            Some(current) if candidate <= *current => {}
            _ => best = Some(candidate),
        }
    }

    Ok(best.map(|(_, path)| path))
}
