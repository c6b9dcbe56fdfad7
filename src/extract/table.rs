// src/extract/table.rs

/// One result row: cell texts in source column order.
pub type ListingRow = Vec<String>;

/// Extracted result set. Built fresh per search, never persisted.
///
/// Rows are kept exactly as extracted; ragged rows are not padded.
/// Use [`ListingTable::is_rectangular`] when a uniform width matters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingTable {
    /// Column labels, when the source had any. Never counted as a row.
    pub headers: Option<Vec<String>>,
    pub rows: Vec<ListingRow>,
}

impl ListingTable {
    pub fn new(headers: Option<Vec<String>>, rows: Vec<ListingRow>) -> Self {
        Self { headers, rows }
    }

    /// The "no results" outcome.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Widest row (or header); what a display needs to allocate.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(|r| r.len())
            .chain(std::iter::once(self.header_count()))
            .max()
            .unwrap_or(0)
    }

    /// Every row has the same number of cells.
    pub fn is_rectangular(&self) -> bool {
        match self.rows.first() {
            Some(first) => self.rows.iter().all(|r| r.len() == first.len()),
            None => true,
        }
    }
}
