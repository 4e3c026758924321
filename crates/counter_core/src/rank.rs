use std::cmp::Ordering;
use std::fmt::{self, Write};

use crate::frequency::FrequencyMap;

/// One line of the final report.
///
/// Ordering is the report order: higher count first, then token ascending
/// by bytes. No two distinct entries compare equal unless they are identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub token: String,
    pub count: u64,
}

impl Ord for RankedEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then_with(|| self.token.as_bytes().cmp(other.token.as_bytes()))
    }
}

impl PartialOrd for RankedEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.token, self.count)
    }
}

/// Snapshot `map` into report order. The result does not borrow the map.
pub fn rank(map: &FrequencyMap) -> Vec<RankedEntry> {
    let mut entries: Vec<RankedEntry> = map
        .iter()
        .map(|(token, count)| RankedEntry {
            token: token.as_str().to_owned(),
            count,
        })
        .collect();
    entries.sort_unstable();
    entries
}

/// Render entries as `"<token>, <count>\n"` lines, in the given order.
pub fn render_report(entries: &[RankedEntry]) -> String {
    let mut out = String::with_capacity(entries.iter().map(|e| e.token.len() + 8).sum());
    for entry in entries {
        // Writing into a String never fails.
        let _ = writeln!(out, "{entry}");
    }
    out
}
