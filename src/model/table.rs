//! Table types.

use super::{Paragraph, StructuralElement};
use serde::{Deserialize, Serialize};

/// A table block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    /// Rows in the table
    pub table_rows: Vec<TableRow>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table where every cell holds one plain paragraph.
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            table_rows: rows.into_iter().map(TableRow::from_strings).collect(),
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: TableRow) {
        self.table_rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.table_rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table_rows.is_empty()
    }
}

/// A table row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableRow {
    /// Cells in the row
    pub table_cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            table_cells: values.into_iter().map(TableCell::text).collect(),
        }
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TableCell {
    /// Cell content blocks
    pub content: Vec<StructuralElement>,
}

impl TableCell {
    /// Create a cell with a single plain paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::with_paragraphs([Paragraph::with_text(text)])
    }

    /// Create a cell with multiple paragraphs.
    pub fn with_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        Self {
            content: paragraphs
                .into_iter()
                .map(StructuralElement::paragraph)
                .collect(),
        }
    }

    /// Paragraphs in the cell, in order.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.content.iter().filter_map(|e| e.paragraph.as_ref())
    }
}
