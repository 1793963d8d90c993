//! Progress observation for long-running hash builds.

mod console;

pub use console::ConsoleProgress;

/// Item id for the file-list counting phase.
pub const ITEM_FILE_LIST: &str = "FILELIST";

/// Item id for the aggregate bytes-hashed counter.
pub const ITEM_HASH: &str = "HASH";

/// Item id prefix for per-worker file offsets; the worker index follows
/// in brackets, e.g. `FILE[3]`.
pub const ITEM_FILE: &str = "FILE";

/// Observer for hash-build progress events.
///
/// Purely observational: the hash builder never reads anything back, and a
/// no-op observer yields a byte-identical manifest. Workers call this
/// concurrently, so implementations must serialize their own state.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, item_id: &str, current: u64, total: u64, message: Option<&str>);
}

/// Observer that discards every event.
pub struct NullObserver;

impl ProgressObserver for NullObserver {
    fn on_progress(&self, _item_id: &str, _current: u64, _total: u64, _message: Option<&str>) {}
}
