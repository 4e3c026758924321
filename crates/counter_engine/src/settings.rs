use std::num::NonZeroUsize;
use std::thread;

/// File count from which counting switches to worker threads.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountSettings {
    /// Manifests with fewer files than this are counted on the calling thread.
    pub parallel_threshold: usize,
    /// Upper bound on worker threads. `None` uses the host's available parallelism.
    pub max_workers: Option<NonZeroUsize>,
}

impl Default for CountSettings {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            max_workers: None,
        }
    }
}

impl CountSettings {
    pub(crate) fn worker_count(&self, file_count: usize) -> usize {
        let limit = self
            .max_workers
            .or_else(|| thread::available_parallelism().ok())
            .map_or(1, NonZeroUsize::get);
        limit.min(file_count).max(1)
    }
}
