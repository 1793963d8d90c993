//! Console progress renderer.

use crate::progress::{ProgressObserver, ITEM_FILE_LIST};
use parking_lot::Mutex;
use std::time::{Duration, Instant};

const DEFAULT_RENDER_INTERVAL: Duration = Duration::from_millis(200);

/// Renders progress to stderr on a single carriage-return-overwritten line.
///
/// Updates arrive from every hashing worker; rendering is throttled to one
/// line per interval so a fast build does not flood the terminal. Byte
/// counters are humanized, file-list counts are printed as-is.
pub struct ConsoleProgress {
    state: Mutex<RenderState>,
    interval: Duration,
}

struct RenderState {
    last_render: Option<Instant>,
    last_width: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_RENDER_INTERVAL)
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            state: Mutex::new(RenderState {
                last_render: None,
                last_width: 0,
            }),
            interval,
        }
    }

    /// Erase the progress line before regular output resumes.
    pub fn finish(&self) {
        let mut state = self.state.lock();
        if state.last_width > 0 {
            eprint!("\r{}\r", " ".repeat(state.last_width));
            state.last_width = 0;
        }
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressObserver for ConsoleProgress {
    fn on_progress(&self, item_id: &str, current: u64, total: u64, message: Option<&str>) {
        let mut state = self.state.lock();

        let now = Instant::now();
        let due = current >= total
            || state
                .last_render
                .map_or(true, |last| now.duration_since(last) >= self.interval);
        if !due {
            return;
        }
        state.last_render = Some(now);

        let (current, total) = if item_id == ITEM_FILE_LIST {
            (current.to_string(), total.to_string())
        } else {
            (human_size(current), human_size(total))
        };
        let line = match message {
            Some(message) => format!("{}: {} / {} {}", item_id, current, total, message),
            None => format!("{}: {} / {}", item_id, current, total),
        };

        let padding = state.last_width.saturating_sub(line.len());
        state.last_width = line.len();
        eprint!("\r{}{}", line, " ".repeat(padding));
    }
}

/// Format a byte count for humans, e.g. `1.5 MiB`.
fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
