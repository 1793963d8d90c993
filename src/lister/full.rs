//! Full recursive directory enumeration.

use crate::error::ChecksumError;
use crate::lister::FileLister;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Enumerates every regular file under the root, recursively.
///
/// Subtrees that deny access are treated as empty rather than failing the
/// whole enumeration; any other traversal error aborts the pass.
pub struct FullDirectoryLister;

impl FileLister for FullDirectoryLister {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, ChecksumError> {
        let mut files = Vec::new();

        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name();

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    if e.io_error().map(|io| io.kind()) == Some(ErrorKind::PermissionDenied) {
                        debug!(path = ?e.path(), "Access denied, treating subtree as empty");
                        continue;
                    }
                    return Err(ChecksumError::Walk(e.to_string()));
                }
            };

            if entry.file_type().is_file() {
                files.push(entry.path().to_path_buf());
            }
        }

        Ok(files)
    }
}
