//! Word list loading and candidate filtering
//!
//! A word list is a plain text file with one token per line. Candidates are
//! the lowercase, purely alphabetic lines whose length falls inside the
//! configured bounds, deduplicated and ordered by length.

mod stats;

pub use stats::WordStats;

use std::collections::HashSet;
use std::path::Path;

use crate::error::{Result, SweepError};

/// Read every line of a word list.
pub fn read_words(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|e| {
        SweepError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
    })?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(|line| line.to_string())
        .collect())
}

/// Load and filter candidates from `path`.
///
/// An unreadable file is logged and yields no candidates, so the scan still
/// runs (and checks nothing).
pub fn load_candidates(path: &Path, min_length: usize, max_length: usize) -> Vec<String> {
    match read_words(path) {
        Ok(lines) => {
            let candidates = filter_candidates(lines, min_length, max_length);
            tracing::info!(
                path = %path.display(),
                candidates = candidates.len(),
                "Loaded word list"
            );
            candidates
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to read word list");
            Vec::new()
        }
    }
}

/// Normalize, filter, deduplicate and length-sort raw lines.
///
/// Ties keep first-seen file order (stable sort over an insertion-ordered set).
pub fn filter_candidates<I, S>(lines: I, min_length: usize, max_length: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut words: Vec<String> = lines
        .into_iter()
        .map(|line| line.as_ref().to_lowercase().trim().to_string())
        .filter(|word| is_candidate(word, min_length, max_length))
        .filter(|word| seen.insert(word.clone()))
        .collect();

    words.sort_by_key(|word| word.chars().count());
    words
}

fn is_candidate(word: &str, min_length: usize, max_length: usize) -> bool {
    let len = word.chars().count();
    len > 0 && len >= min_length && len <= max_length && word.chars().all(char::is_alphabetic)
}
