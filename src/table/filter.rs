//! Table filtering
//!
//! The search box splits its text on single spaces; a row matches when one of
//! its cells contains every word, ignoring case. Selected filters pin a cell
//! to an exact value; an empty value leaves the column unconstrained.

use rustc_hash::FxHashMap;

use crate::table::TableRow;

/// Search text plus exact-match column filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableFilter {
    text: String,
    selected: FxHashMap<String, String>,
}

impl TableFilter {
    /// Filter matching every row.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter with only search text.
    #[must_use]
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Current search text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the free-text search.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Pin column `key` to `value`. An empty value clears the constraint.
    pub fn select(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.selected.insert(key.into(), value.into());
    }

    /// Whether `row` passes both the text search and every selected filter.
    #[must_use]
    pub fn matches<R: TableRow + ?Sized>(&self, row: &R) -> bool {
        let cells = row.cells();

        if !self.text.is_empty() {
            let words: Vec<String> = self.text.split(' ').map(str::to_lowercase).collect();

            let found = cells.iter().any(|cell| {
                let value = cell.value.to_lowercase();

                words.iter().all(|word| value.contains(word.as_str()))
            });

            if !found {
                return false;
            }
        }

        self.selected
            .iter()
            .filter(|(_, wanted)| !wanted.is_empty())
            .all(|(key, wanted)| {
                cells
                    .iter()
                    .find(|cell| cell.key == key.as_str())
                    .is_some_and(|cell| cell.value == *wanted)
            })
    }

    /// Rows passing [`Self::matches`], in their original order.
    pub fn apply<'a, R: TableRow>(&'a self, rows: &'a [R]) -> impl Iterator<Item = &'a R> + 'a {
        rows.iter().filter(move |row| self.matches(*row))
    }
}
