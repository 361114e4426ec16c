//! Rendering result with metadata and statistics.

use super::Metadata;
use crate::ir::{BlockTag, Intermediate, Node};
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Metadata that went into the front matter
    pub metadata: Metadata,

    /// Conversion statistics
    pub stats: ConversionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, metadata: Metadata, stats: ConversionStats) -> Self {
        Self {
            content,
            metadata,
            stats,
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Node counts collected from the intermediate representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of heading nodes
    pub heading_count: u32,

    /// Number of paragraph nodes
    pub paragraph_count: u32,

    /// Number of block quote nodes
    pub quote_count: u32,

    /// Number of list nodes
    pub list_count: u32,

    /// Number of top-level list items
    pub list_item_count: u32,

    /// Number of table nodes
    pub table_count: u32,

    /// Number of image nodes
    pub image_count: u32,

    /// Whether a cover image was found
    pub has_cover: bool,

    /// Approximate word count of the body (whitespace-separated tokens)
    pub word_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count nodes of an intermediate representation.
    pub fn from_intermediate(ir: &Intermediate) -> Self {
        let mut stats = Self::new();
        stats.has_cover = ir.cover.is_some();
        for node in &ir.content {
            stats.add_node(node);
        }
        stats
    }

    /// Count one node and the words it carries.
    pub fn add_node(&mut self, node: &Node) {
        if let Some((tag, text)) = node.as_text() {
            match tag {
                BlockTag::P => self.paragraph_count += 1,
                BlockTag::Blockquote => self.quote_count += 1,
                _ => self.heading_count += 1,
            }
            self.word_count += count_words(text);
            return;
        }

        match node {
            Node::Img(_) => self.image_count += 1,
            Node::Ul(items) | Node::Ol(items) => {
                self.list_count += 1;
                self.list_item_count += items.len() as u32;
                for line in items.iter().flat_map(|item| item.lines()) {
                    self.word_count += count_words(strip_list_marker(line));
                }
            }
            Node::Table(table) => {
                self.table_count += 1;
                for cell in table.headers.iter().chain(table.rows.iter().flatten()) {
                    self.word_count += count_words(cell);
                }
            }
            _ => {}
        }
    }

    /// Total number of nodes counted.
    pub fn node_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.quote_count
            + self.list_count
            + self.table_count
            + self.image_count
    }
}

/// Whitespace-separated tokens holding at least one letter or digit.
fn count_words(text: &str) -> u32 {
    text.split_whitespace()
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .count() as u32
}

/// Drop the marker of a folded nested item line (`  - x`, `  1. x`).
fn strip_list_marker(line: &str) -> &str {
    let trimmed = line.trim_start();
    if trimmed.len() == line.len() {
        return line;
    }
    trimmed
        .strip_prefix("- ")
        .or_else(|| trimmed.strip_prefix("1. "))
        .unwrap_or(trimmed)
}
