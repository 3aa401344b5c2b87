//! Per-round guess log

use serde::{Deserialize, Serialize};
use std::fmt;

use super::outcome::GuessOutcome;

/// One line of the guess log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEntry {
    /// A submitted guess; `text` is the raw input for invalid guesses and the parsed value otherwise
    Guess { text: String, outcome: GuessOutcome },
    Hint { lower: u32, upper: u32 },
}

impl HistoryEntry {
    /// Left-hand column: the guess text, or `"Hint"`
    pub fn text(&self) -> &str {
        match self {
            HistoryEntry::Guess { text, .. } => text,
            HistoryEntry::Hint { .. } => "Hint",
        }
    }

    /// Right-hand column: the outcome label, or the hint window
    pub fn label(&self) -> String {
        match self {
            HistoryEntry::Guess { outcome, .. } => outcome.label().to_string(),
            HistoryEntry::Hint { lower, upper } => format!("{} to {}", lower, upper),
        }
    }

    pub fn outcome(&self) -> Option<GuessOutcome> {
        match self {
            HistoryEntry::Guess { outcome, .. } => Some(*outcome),
            HistoryEntry::Hint { .. } => None,
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryEntry::Guess { text, outcome } => write!(f, "{} - {}", text, outcome.label()),
            HistoryEntry::Hint { lower, upper } => write!(f, "Hint: {} to {}", lower, upper),
        }
    }
}

/// Append-only log for the current round
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessLog {
    entries: Vec<HistoryEntry>,
}

impl GuessLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Number of guesses logged, hints excluded
    pub fn guess_count(&self) -> usize {
        self.entries.iter().filter(|e| e.outcome().is_some()).count()
    }

    /// Scroll view: up to `rows` entries starting at `offset`
    ///
    /// An offset past the end yields an empty slice.
    pub fn page(&self, offset: usize, rows: usize) -> &[HistoryEntry] {
        let start = offset.min(self.entries.len());
        let end = start.saturating_add(rows).min(self.entries.len());
        &self.entries[start..end]
    }

    /// The last `rows` entries, the view a log scrolled to the bottom shows
    pub fn tail(&self, rows: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(rows);
        &self.entries[start..]
    }

    /// Number of pages of `rows` entries each
    pub fn page_count(&self, rows: usize) -> usize {
        if rows == 0 {
            return 0;
        }
        self.entries.len().div_ceil(rows)
    }
}

impl<'a> IntoIterator for &'a GuessLog {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
