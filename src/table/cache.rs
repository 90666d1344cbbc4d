//! Row cache

/// Per-screen list of rows fetched from the backend.
///
/// The cache is only ever swapped wholesale; a failed refetch marks it stale
/// rather than leaving a half-updated list behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCache<T> {
    rows: Vec<T>,
    stale: bool,
}

impl<T> Default for RowCache<T> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            stale: true,
        }
    }
}

impl<T> RowCache<T> {
    /// Empty cache that still needs a first fetch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a freshly fetched list.
    pub fn replace(&mut self, rows: Vec<T>) {
        self.rows = rows;
        self.stale = false;
    }

    /// Mark the cached rows as out of date.
    pub fn invalidate(&mut self) {
        self.stale = true;
    }

    /// Whether the rows need refetching.
    #[must_use]
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Cached rows, stale or not.
    #[must_use]
    pub fn rows(&self) -> &[T] {
        &self.rows
    }

    /// Number of cached rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether no rows are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
