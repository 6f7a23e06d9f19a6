//! Table types.

use super::{BoundingRegion, Span};
use serde::{Deserialize, Serialize};

/// A table as a dense row-major grid of cell texts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Number of rows
    pub rows: usize,

    /// Number of columns
    pub columns: usize,

    /// Cell texts, `rows` × `columns`; uninitialised cells are empty
    pub data: Vec<Vec<String>>,

    /// Positions in the content stream
    pub spans: Vec<Span>,

    /// Visual locations
    pub bounding_regions: Vec<BoundingRegion>,
}

impl Table {
    /// Create an empty grid with the given dimensions.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![vec![String::new(); columns]; rows],
            spans: Vec::new(),
            bounding_regions: Vec::new(),
        }
    }

    /// Create a table from rows of text values.
    ///
    /// The column count is the widest row; shorter rows are padded.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut data: Vec<Vec<String>> = rows
            .into_iter()
            .map(|r| r.into_iter().map(Into::into).collect())
            .collect();
        let columns = data.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut data {
            row.resize(columns, String::new());
        }
        Self {
            rows: data.len(),
            columns,
            data,
            spans: Vec::new(),
            bounding_regions: Vec::new(),
        }
    }

    /// Set a cell's text. Returns `false` if the position is outside the grid.
    pub fn set_cell(&mut self, row: usize, column: usize, text: impl Into<String>) -> bool {
        match self.data.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                *cell = text.into();
                true
            }
            None => false,
        }
    }

    /// Get a cell's text.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.data.get(row)?.get(column).map(String::as_str)
    }

    /// Attach a span and return self.
    pub fn span(mut self, offset: u64, length: u64) -> Self {
        self.spans.push(Span::new(offset, length));
        self
    }

    /// Attach a bounding region and return self.
    pub fn region(mut self, region: BoundingRegion) -> Self {
        self.bounding_regions.push(region);
        self
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        self.data
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_new() {
        let table = Table::new(2, 3);
        assert_eq!(table.data.len(), 2);
        assert!(table.data.iter().all(|r| r.len() == 3));
        assert_eq!(table.cell(1, 2), Some(""));
    }

    #[test]
    fn test_set_cell_bounds() {
        let mut table = Table::new(1, 1);
        assert!(table.set_cell(0, 0, "x"));
        assert!(!table.set_cell(1, 0, "y"));
        assert!(!table.set_cell(0, 5, "z"));
        assert_eq!(table.cell(0, 0), Some("x"));
    }

    #[test]
    fn test_from_rows_pads() {
        let table = Table::from_rows(vec![vec!["A", "B"], vec!["1"]]);
        assert_eq!(table.rows, 2);
        assert_eq!(table.columns, 2);
        assert_eq!(table.cell(1, 1), Some(""));
        assert_eq!(table.plain_text(), "A\tB\n1\t");
    }
}
