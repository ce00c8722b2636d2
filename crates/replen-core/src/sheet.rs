//! Sheet type

use crate::error::{Error, Result};
use crate::value::CellValue;

/// A named table with a header row and dense data rows
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Sheet name
    name: String,
    /// Column headers
    columns: Vec<String>,
    /// Data rows; every row has exactly `columns.len()` cells
    rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Create a new empty sheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    // === Columns ===

    /// Get the column headers
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Replace the column headers.
    ///
    /// Existing rows are padded or truncated to the new width.
    pub fn set_columns<I, S>(&mut self, columns: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        let width = self.columns.len();
        for row in &mut self.rows {
            row.resize(width, CellValue::Empty);
        }
    }

    /// Find a column index by header name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Resolve each named column to its index.
    ///
    /// Fails with [`Error::MissingColumns`] listing every absent column, so
    /// the caller can report the whole schema problem at once.
    pub fn require_columns(&self, names: &[&str]) -> Result<Vec<usize>> {
        let mut indexes = Vec::with_capacity(names.len());
        let mut missing = Vec::new();

        for name in names {
            match self.column_index(name) {
                Some(idx) => indexes.push(idx),
                None => missing.push(name.to_string()),
            }
        }

        if missing.is_empty() {
            Ok(indexes)
        } else {
            Err(Error::MissingColumns(missing))
        }
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    // === Rows ===

    /// Append a data row, padding or truncating it to the header width
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    /// Get a data row by 0-based index
    pub fn row(&self, index: usize) -> Result<&[CellValue]> {
        self.rows
            .get(index)
            .map(Vec::as_slice)
            .ok_or(Error::RowOutOfBounds(index, self.rows.len()))
    }

    /// Get a cell value by row and column indices (Empty when out of range)
    pub fn value_at(&self, row: usize, col: usize) -> CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .cloned()
            .unwrap_or(CellValue::Empty)
    }

    /// Iterate over data rows
    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no data rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
