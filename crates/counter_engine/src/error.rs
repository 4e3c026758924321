use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CounterError {
    #[error("unable to open the input manifest {}: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to open listed file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unable to open output file {}: {source}", path.display())]
    OutputAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to start counting workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl CounterError {
    /// True for errors caused by a path the caller supplied.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            CounterError::InvalidManifest { .. }
                | CounterError::FileAccess { .. }
                | CounterError::OutputAccess { .. }
        )
    }
}
