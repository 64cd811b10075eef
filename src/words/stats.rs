//! Length histogram for a candidate list

use std::collections::BTreeMap;

/// Candidate counts grouped by word length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    /// Length -> count, ascending by length
    pub by_length: BTreeMap<usize, usize>,
    pub total: usize,
}

impl WordStats {
    pub fn from_candidates<S: AsRef<str>>(candidates: &[S]) -> Self {
        let mut by_length = BTreeMap::new();
        for word in candidates {
            *by_length.entry(word.as_ref().chars().count()).or_insert(0) += 1;
        }

        Self {
            by_length,
            total: candidates.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl std::fmt::Display for WordStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (length, count) in &self.by_length {
            writeln!(f, "   {}-letter words: {}", length, count)?;
        }
        write!(f, "   Total words: {}", self.total)
    }
}
