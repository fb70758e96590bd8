use std::collections::BTreeMap;

/// Occurrence count of every distinct symbol in a message.
///
/// Iteration is in ascending symbol order so that tree construction, and
/// therefore the resulting codebook, is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<char, u64>,
}

impl FrequencyTable {
    /// Count the characters of `text` in a single pass.
    pub fn from_text(text: &str) -> Self {
        Self::from_symbols(text.chars())
    }

    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts = BTreeMap::new();
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, symbol: char) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    /// Total number of symbols counted.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
