//! Counter core: pure tokenizing, frequency aggregation and ranking.
mod frequency;
mod rank;
mod token;

pub use frequency::FrequencyMap;
pub use rank::{rank, render_report, RankedEntry};
pub use token::{normalize_word, split_words, Token};
