//! Hash builder: turns an enumerated file list into a deterministic manifest.

use crate::error::ChecksumError;
use crate::hash::Algorithm;
use crate::lister::FileLister;
use crate::manifest::{FileEntry, Manifest};
use crate::progress::{ProgressObserver, ITEM_FILE, ITEM_FILE_LIST, ITEM_HASH};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Builds checksum manifests for a package directory.
///
/// Hashing fans out over a bounded worker pool; everything else
/// (enumeration, sorting, comparison, serialization) is sequential.
/// Worker scheduling never affects the result: entries are sorted by
/// relative path before serialization.
pub struct HashBuilder<'a> {
    root: PathBuf,
    algorithm: Algorithm,
    excluded: Vec<PathBuf>,
    parallelism: Option<usize>,
    observer: &'a dyn ProgressObserver,
}

impl<'a> HashBuilder<'a> {
    pub fn new(root: PathBuf, algorithm: Algorithm, observer: &'a dyn ProgressObserver) -> Self {
        Self {
            root,
            algorithm,
            excluded: Vec::new(),
            parallelism: None,
            observer,
        }
    }

    /// Paths never hashed even when enumerated: the manifest's own output
    /// files, so a manifest never hashes itself.
    pub fn with_excluded_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.excluded = paths;
        self
    }

    /// Worker count for content hashing. `None` uses the available
    /// hardware concurrency.
    pub fn with_parallelism(mut self, workers: Option<usize>) -> Self {
        self.parallelism = workers;
        self
    }

    /// Build a manifest for the package root.
    ///
    /// All-or-nothing: a single unreadable file aborts the whole build and
    /// no partial manifest is returned.
    #[instrument(skip(self, lister), fields(package = %self.root.display()))]
    pub fn build(&self, lister: &dyn FileLister) -> Result<Manifest, ChecksumError> {
        let start = Instant::now();

        let candidates: Vec<PathBuf> = lister
            .list(&self.root)?
            .into_iter()
            .filter(|path| !self.excluded.contains(path))
            .collect();
        let candidate_count = candidates.len() as u64;

        let mut files = Vec::with_capacity(candidates.len());
        for path in candidates {
            let length = std::fs::metadata(&path)
                .map_err(|e| ChecksumError::Hash {
                    path: path.clone(),
                    source: e,
                })?
                .len();
            files.push((path, length));
            self.observer.on_progress(
                ITEM_FILE_LIST,
                files.len() as u64,
                candidate_count,
                None,
            );
        }

        let total_bytes: u64 = files.iter().map(|(_, length)| length).sum();
        debug!(
            file_count = files.len(),
            total_bytes, "File list built"
        );
        self.observer.on_progress(ITEM_HASH, 0, total_bytes, None);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.parallelism.unwrap_or(0))
            .build()
            .map_err(|e| ChecksumError::WorkerPool(e.to_string()))?;

        let hashed_bytes = AtomicU64::new(0);
        let entries = pool.install(|| {
            files
                .par_iter()
                .map_init(
                    // One private hasher per worker; digest state is never
                    // shared across concurrent hash operations.
                    || self.algorithm.hasher(),
                    |hasher, (path, length)| {
                        let relative_path = self.relative_path(path);
                        let item_id = format!(
                            "{}[{}]",
                            ITEM_FILE,
                            rayon::current_thread_index().unwrap_or(0)
                        );

                        let file = File::open(path).map_err(|e| ChecksumError::Hash {
                            path: path.clone(),
                            source: e,
                        })?;
                        let mut reader = BufReader::new(file);
                        let content_hash = hasher
                            .hash_reader(&mut reader, |offset| {
                                self.observer.on_progress(
                                    &item_id,
                                    offset,
                                    *length,
                                    Some(&relative_path),
                                );
                            })
                            .map_err(|e| ChecksumError::Hash {
                                path: path.clone(),
                                source: e,
                            })?;

                        let done = hashed_bytes.fetch_add(*length, Ordering::Relaxed) + *length;
                        self.observer
                            .on_progress(ITEM_HASH, done, total_bytes, Some(&relative_path));

                        Ok(FileEntry {
                            relative_path,
                            content_hash,
                            length: *length,
                        })
                    },
                )
                .collect::<Result<Vec<_>, ChecksumError>>()
        })?;

        let manifest = Manifest::from_entries(entries, self.algorithm);
        info!(
            entry_count = manifest.entries.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Manifest build completed"
        );
        Ok(manifest)
    }

    /// Strip the package-root prefix; paths outside the root pass through
    /// unchanged.
    fn relative_path(&self, path: &Path) -> String {
        match path.strip_prefix(&self.root) {
            Ok(relative) => relative.to_string_lossy().into_owned(),
            Err(_) => path.to_string_lossy().into_owned(),
        }
    }
}
