//! Table flattening.

use super::inline::clean_text;
use crate::ir::{Node, TableNode};
use crate::model::{Table, TableCell, TableRow};

/// Flatten a table into a header row and body rows of plain strings.
///
/// The first row is always the header. A table without rows yields `None`.
pub fn render_table(table: &Table) -> Option<Node> {
    let (first, rest) = table.table_rows.split_first()?;

    Some(Node::Table(TableNode {
        headers: row_texts(first),
        rows: rest.iter().map(row_texts).collect(),
    }))
}

fn row_texts(row: &TableRow) -> Vec<String> {
    row.table_cells.iter().map(cell_text).collect()
}

/// Cleaned paragraph texts of a cell, concatenated without separator.
fn cell_text(cell: &TableCell) -> String {
    cell.paragraphs().map(|p| clean_text(&p.raw_text())).collect()
}
