//! File enumeration policies for package directories.

mod full;
mod latest;

pub use full::FullDirectoryLister;
pub use latest::LatestPerModuleLister;

use crate::error::ChecksumError;
use std::path::{Path, PathBuf};

/// Produces the candidate file list for one package root.
///
/// A call is one traversal pass over the filesystem. For an unchanged
/// filesystem, repeated calls return the same paths; the final manifest
/// ordering does not depend on the order returned here.
pub trait FileLister {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>, ChecksumError>;
}
