//! Counter engine: manifest and file IO, concurrent counting, report output.
mod count;
mod error;
mod manifest;
mod orchestrator;
mod report;
mod settings;

pub use count::count_file;
pub use error::CounterError;
pub use manifest::Manifest;
pub use orchestrator::{Counter, Strategy};
pub use report::ReportFile;
pub use settings::{CountSettings, DEFAULT_PARALLEL_THRESHOLD};

pub use counter_core::{rank, render_report, FrequencyMap, RankedEntry, Token};
