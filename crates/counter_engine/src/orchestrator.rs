use std::path::PathBuf;

use counter_core::FrequencyMap;
use engine_logging::{engine_debug, engine_info, engine_warn};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{count_file, CountSettings, CounterError, Manifest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Sequential,
    Concurrent { workers: usize },
}

/// Counts every file of a manifest into one [`FrequencyMap`].
///
/// Owned by the caller for the duration of one run.
#[derive(Debug, Clone, Default)]
pub struct Counter {
    settings: CountSettings,
}

impl Counter {
    pub fn new(settings: CountSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &CountSettings {
        &self.settings
    }

    pub fn strategy_for(&self, file_count: usize) -> Strategy {
        if file_count < self.settings.parallel_threshold {
            Strategy::Sequential
        } else {
            Strategy::Concurrent {
                workers: self.settings.worker_count(file_count),
            }
        }
    }

    /// Count and merge all files. The first failure aborts the whole run and
    /// nothing counted so far is returned.
    pub fn process(&self, manifest: &Manifest) -> Result<FrequencyMap, CounterError> {
        let strategy = self.strategy_for(manifest.len());
        engine_info!(
            "Counting {} files, strategy {:?}",
            manifest.len(),
            strategy
        );
        let total = match strategy {
            Strategy::Sequential => count_sequentially(manifest.paths())?,
            Strategy::Concurrent { workers } => count_concurrently(manifest.paths(), workers)?,
        };
        engine_info!(
            "Counted {} tokens, {} unique",
            total.total(),
            total.len()
        );
        Ok(total)
    }
}

fn count_sequentially(paths: &[PathBuf]) -> Result<FrequencyMap, CounterError> {
    let mut total = FrequencyMap::new();
    for path in paths {
        total.merge(count_file(path)?);
    }
    Ok(total)
}

/// Fan out one task per file on a pool of `workers` threads and merge the
/// partial maps on the calling thread.
///
/// `collect` into a `Result` stops handing out files after the first error;
/// maps already produced are dropped unmerged.
fn count_concurrently(paths: &[PathBuf], workers: usize) -> Result<FrequencyMap, CounterError> {
    let pool = worker_pool(workers)?;
    let partials: Vec<FrequencyMap> = pool.install(|| {
        paths
            .par_iter()
            .enumerate()
            .map(|(index, path)| {
                count_file(path).inspect_err(|err| {
                    engine_warn!("Counting aborted at file #{}: {}", index, err);
                })
            })
            .collect::<Result<_, _>>()
    })?;

    let mut total = FrequencyMap::new();
    for (index, map) in partials.into_iter().enumerate() {
        engine_debug!("Merging file #{} ({} unique)", index, map.len());
        total.merge(map);
    }
    Ok(total)
}

fn worker_pool(workers: usize) -> Result<ThreadPool, CounterError> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|index| format!("counter-worker-{index}"))
        .start_handler(|index| engine_logging::set_worker_label(format!("worker-{index}")))
        .exit_handler(|_| engine_logging::clear_worker_label())
        .build()?;
    Ok(pool)
}
