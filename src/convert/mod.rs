//! First stage: walking a document into intermediate nodes.
//!
//! Blocks are visited once, in document order. Bulleted paragraphs go to the
//! [`ListAccumulator`], other paragraphs to [`render_paragraph`], and tables
//! with at least one row to [`render_table`]. Anything else is skipped.
//!
//! # Example
//!
//! ```
//! use gdoc2md::convert;
//! use gdoc2md::ir::Node;
//! use gdoc2md::model::{Document, Paragraph};
//!
//! let mut doc = Document::new();
//! doc.add_paragraph(Paragraph::heading("Hello\n", 1));
//!
//! let ir = convert::convert(&doc).unwrap();
//! assert!(ir.cover.is_none());
//! assert_eq!(ir.content, vec![Node::H1("Hello".to_string())]);
//! ```

mod image;
mod inline;
mod list;
mod paragraph;
mod table;

pub use image::{extract_cover, resolve_image};
pub use inline::{clean_text, format_text_run};
pub use list::ListAccumulator;
pub use paragraph::{block_tag, render_paragraph};
pub use table::render_table;

use crate::error::Result;
use crate::ir::{Intermediate, Node};
use crate::model::{Block, Document};

/// Run the first stage: extract the cover and walk the body.
pub fn convert(doc: &Document) -> Result<Intermediate> {
    let cover = extract_cover(doc)?;
    let content = DocumentWalker::new(doc).walk()?;
    Ok(Intermediate { cover, content })
}

/// Single pass over the body content.
pub struct DocumentWalker<'a> {
    doc: &'a Document,
    nodes: Vec<Node>,
    lists: ListAccumulator,
}

impl<'a> DocumentWalker<'a> {
    /// Create a walker for a document.
    pub fn new(doc: &'a Document) -> Self {
        Self {
            doc,
            nodes: Vec::new(),
            lists: ListAccumulator::new(),
        }
    }

    /// Visit every block and return the node sequence.
    pub fn walk(mut self) -> Result<Vec<Node>> {
        let doc = self.doc;
        for element in doc.blocks() {
            match element.block() {
                Block::Paragraph(p) => match p.bullet.as_ref() {
                    Some(bullet) => self.lists.push(doc, p, bullet, &mut self.nodes)?,
                    None => {
                        self.lists.close(&mut self.nodes);
                        render_paragraph(doc, p, &mut self.nodes)?;
                    }
                },
                Block::Table(t) => {
                    self.lists.close(&mut self.nodes);
                    match render_table(t) {
                        Some(node) => self.nodes.push(node),
                        None => log::debug!("Skipping table without rows"),
                    }
                }
                Block::Other => self.lists.close(&mut self.nodes),
            }
        }
        self.lists.close(&mut self.nodes);

        log::debug!(
            "Walked {} blocks into {} nodes",
            doc.blocks().len(),
            self.nodes.len()
        );
        Ok(self.nodes)
    }
}
