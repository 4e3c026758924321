use std::collections::hash_map::{self, HashMap};

use crate::token::{normalize_word, split_words, Token};

/// Occurrence count per [`Token`]. Every stored count is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: HashMap<Token, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and count every retained token.
    pub fn from_text(text: &str) -> Self {
        let mut map = Self::new();
        map.add_text(text);
        map
    }

    /// Add the tokens of `text` to this map. Discarded words are skipped.
    pub fn add_text(&mut self, text: &str) {
        for token in split_words(text).filter_map(normalize_word) {
            self.record(token);
        }
    }

    /// Count one occurrence of `token`, inserting it with 1 when new.
    pub fn record(&mut self, token: Token) {
        self.add(token, 1);
    }

    /// Sum `other` into `self`. Shared tokens add up, the rest is carried over.
    pub fn merge(&mut self, other: FrequencyMap) {
        if self.counts.is_empty() {
            self.counts = other.counts;
            return;
        }
        for (token, count) in other.counts {
            self.add(token, count);
        }
    }

    fn add(&mut self, token: Token, count: u64) {
        if count == 0 {
            return;
        }
        *self.counts.entry(token).or_insert(0) += count;
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.counts.get(token).copied()
    }

    /// Number of unique tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Iterate in unspecified order. Use [`crate::rank`] for a stable order.
    pub fn iter(&self) -> impl Iterator<Item = (&Token, u64)> + '_ {
        self.counts.iter().map(|(token, count)| (token, *count))
    }
}

impl FromIterator<Token> for FrequencyMap {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        let mut map = Self::new();
        for token in iter {
            map.record(token);
        }
        map
    }
}

impl IntoIterator for FrequencyMap {
    type Item = (Token, u64);
    type IntoIter = hash_map::IntoIter<Token, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}
