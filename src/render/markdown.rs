//! Markdown rendering of intermediate nodes and final assembly.

use crate::convert;
use crate::error::Result;
use crate::ir::{BlockTag, Intermediate, Node, TableNode};
use crate::model::Document;

use super::{CleanupPipeline, ConversionStats, Metadata, RenderOptions, RenderResult};

/// Assemble front matter and body: `---\n<yaml>\n---\n\n<body>`.
///
/// # Example
///
/// ```
/// use gdoc2md::ir::Node;
/// use gdoc2md::render::{assemble, Metadata};
///
/// let nodes = vec![Node::H1("T".to_string())];
/// let metadata = Metadata::new().with_title("T");
/// assert_eq!(assemble(&nodes, &metadata).unwrap(), "---\ntitle: T\n---\n\n# T\n");
/// ```
pub fn assemble(nodes: &[Node], metadata: &Metadata) -> Result<String> {
    let body = MarkdownRenderer::new().render_nodes(nodes);
    join_frontmatter(metadata, &body)
}

fn join_frontmatter(metadata: &Metadata, body: &str) -> Result<String> {
    Ok(format!("---\n{}\n---\n\n{}", metadata.to_yaml()?, body))
}

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> Result<String> {
    let ir = convert::convert(doc)?;
    let renderer = MarkdownRenderer::with_options(options.clone());
    renderer.render(doc, &ir)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let ir = convert::convert(doc)?;
    let renderer = MarkdownRenderer::with_options(options.clone());
    renderer.render_with_stats(doc, &ir)
}

/// Markdown renderer for intermediate nodes.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::with_options(RenderOptions::default())
    }

    /// Create a renderer with the given options.
    pub fn with_options(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render a converted document, building metadata from the document.
    pub fn render(&self, doc: &Document, ir: &Intermediate) -> Result<String> {
        let (content, _) = self.render_internal(doc, ir)?;
        Ok(content)
    }

    /// Render a converted document and return statistics alongside.
    pub fn render_with_stats(&self, doc: &Document, ir: &Intermediate) -> Result<RenderResult> {
        let (content, metadata) = self.render_internal(doc, ir)?;
        let stats = ConversionStats::from_intermediate(ir);
        Ok(RenderResult::new(content, metadata, stats))
    }

    fn render_internal(&self, doc: &Document, ir: &Intermediate) -> Result<(String, Metadata)> {
        let cover = if self.options.include_cover {
            ir.cover.as_ref()
        } else {
            None
        };
        let mut metadata = Metadata::from_document(doc, cover);
        metadata.extend(&self.options.extra_metadata);

        let mut body = self.render_nodes(&ir.content);
        if let Some(ref cleanup_options) = self.options.cleanup {
            let pipeline = CleanupPipeline::new(cleanup_options.clone());
            body = pipeline.process(&body)?;
        }

        let content = if self.options.include_frontmatter {
            join_frontmatter(&metadata, &body)?
        } else {
            body
        };
        Ok((content, metadata))
    }

    /// Render nodes as body text: blocks separated by a blank line, ending
    /// with a single newline. No nodes render as an empty string.
    pub fn render_nodes(&self, nodes: &[Node]) -> String {
        let blocks: Vec<String> = nodes.iter().map(|node| self.render_node(node)).collect();
        if blocks.is_empty() {
            return String::new();
        }
        let mut output = blocks.join("\n\n");
        output.push('\n');
        output
    }

    fn render_node(&self, node: &Node) -> String {
        if let Some((tag, text)) = node.as_text() {
            return match (tag, tag.heading_level()) {
                (_, Some(level)) => heading(level, text),
                (BlockTag::Blockquote, None) => text
                    .lines()
                    .map(|line| format!("> {}", line))
                    .collect::<Vec<_>>()
                    .join("\n"),
                _ => text.to_string(),
            };
        }

        match node {
            Node::Img(image) => image.to_markdown(),
            Node::Ul(items) => items
                .iter()
                .map(|item| format!("- {}", item))
                .collect::<Vec<_>>()
                .join("\n"),
            Node::Ol(items) => items
                .iter()
                .enumerate()
                .map(|(i, item)| format!("{}. {}", i + 1, item))
                .collect::<Vec<_>>()
                .join("\n"),
            Node::Table(table) => self.render_table(table),
            Node::P(_)
            | Node::Blockquote(_)
            | Node::H1(_)
            | Node::H2(_)
            | Node::H3(_)
            | Node::H4(_)
            | Node::H5(_) => String::new(),
        }
    }

    fn render_table(&self, table: &TableNode) -> String {
        let col_count = table
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(table.headers.len()))
            .max()
            .unwrap_or(0);
        if col_count == 0 {
            return String::new();
        }

        let mut lines = Vec::with_capacity(table.rows.len() + 2);
        lines.push(table_row(&table.headers, col_count));
        lines.push(format!("|{}", " --- |".repeat(col_count)));
        for row in &table.rows {
            lines.push(table_row(row, col_count));
        }
        lines.join("\n")
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn heading(level: u8, text: &str) -> String {
    format!("{} {}", "#".repeat(level as usize), text)
}

fn table_row(cells: &[String], col_count: usize) -> String {
    let mut line = String::from("|");
    for i in 0..col_count {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push(' ');
        line.push_str(&escape_cell(cell));
        line.push_str(" |");
    }
    line
}

/// Pipes would end the cell; newlines would end the row.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Cover, Image};
    use crate::model::{Paragraph, Table};
    use crate::render::CleanupPreset;

    fn body(nodes: &[Node]) -> String {
        MarkdownRenderer::new().render_nodes(nodes)
    }

    #[test]
    fn test_assemble_exact_shape() {
        let nodes = vec![Node::H1("T".to_string())];
        let metadata = Metadata::new().with_title("T");
        assert_eq!(
            assemble(&nodes, &metadata).unwrap(),
            "---\ntitle: T\n---\n\n# T\n"
        );
    }

    #[test]
    fn test_render_headings_and_paragraphs() {
        let nodes = vec![
            Node::H2("Section".to_string()),
            Node::P("Body text.".to_string()),
            Node::H5("Small".to_string()),
        ];
        assert_eq!(body(&nodes), "## Section\n\nBody text.\n\n##### Small\n");
    }

    #[test]
    fn test_render_every_heading_level() {
        let nodes: Vec<Node> = [BlockTag::H1, BlockTag::H3, BlockTag::H5]
            .into_iter()
            .map(|tag| Node::text(tag, "x"))
            .collect();
        assert_eq!(body(&nodes), "# x\n\n### x\n\n##### x\n");
    }

    #[test]
    fn test_render_blockquote() {
        assert_eq!(body(&[Node::Blockquote("Quote".to_string())]), "> Quote\n");
    }

    #[test]
    fn test_render_lists() {
        let nodes = vec![
            Node::Ul(vec!["a\n  - nested".to_string(), "b".to_string()]),
            Node::Ol(vec!["one".to_string(), "two".to_string()]),
        ];
        assert_eq!(body(&nodes), "- a\n  - nested\n- b\n\n1. one\n2. two\n");
    }

    #[test]
    fn test_render_image() {
        let nodes = vec![Node::Img(Image::new("https://img/1", "Title", "Alt"))];
        assert_eq!(body(&nodes), "![Alt](https://img/1 \"Title\")\n");
    }

    #[test]
    fn test_render_table() {
        let table = TableNode {
            headers: vec!["Name".to_string(), "Note".to_string()],
            rows: vec![
                vec!["Alice".to_string(), "a|b".to_string()],
                vec!["Bob".to_string()],
            ],
        };
        assert_eq!(
            body(&[Node::Table(table)]),
            "| Name | Note |\n| --- | --- |\n| Alice | a\\|b |\n| Bob |  |\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(body(&[]), "");
    }

    #[test]
    fn test_to_markdown_with_document_metadata() {
        let mut doc = Document::with_title("My Doc");
        doc.add_paragraph(Paragraph::heading("Intro\n", 1));
        doc.add_paragraph(Paragraph::with_text("Hello\n"));

        let result = to_markdown(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result, "---\ntitle: My Doc\n---\n\n# Intro\n\nHello\n");
    }

    #[test]
    fn test_to_markdown_without_frontmatter() {
        let mut doc = Document::with_title("My Doc");
        doc.add_paragraph(Paragraph::with_text("Hello\n"));

        let options = RenderOptions::new().with_frontmatter(false);
        assert_eq!(to_markdown(&doc, &options).unwrap(), "Hello\n");
    }

    #[test]
    fn test_extra_metadata_overrides() {
        let doc = Document::with_title("Original");
        let options = RenderOptions::new()
            .with_metadata("title", "Override")
            .with_metadata("layout", "post");

        let result = to_markdown(&doc, &options).unwrap();
        assert_eq!(result, "---\ntitle: Override\nlayout: post\n---\n\n");
    }

    #[test]
    fn test_stats_count_words_not_markup() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::heading("Title\n", 1));
        doc.add_table(Table::from_rows([["A"], ["B"]]));

        let result = to_markdown_with_stats(&doc, &RenderOptions::new()).unwrap();
        assert!(result.content.ends_with("| A |\n| --- |\n| B |\n"));
        assert_eq!(result.stats.word_count, 3);
    }

    #[test]
    fn test_render_with_stats_and_cleanup() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("one two\n"));
        let options = RenderOptions::new()
            .with_frontmatter(false)
            .with_cleanup_preset(CleanupPreset::Standard);

        let result = to_markdown_with_stats(&doc, &options).unwrap();
        assert_eq!(result.content, "one two\n");
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.word_count, 2);
    }

    #[test]
    fn test_cover_can_be_excluded() {
        let doc = Document::new();
        let ir = Intermediate {
            cover: Some(Cover {
                image: "https://img/c".to_string(),
                ..Cover::default()
            }),
            content: vec![],
        };

        let with_cover = MarkdownRenderer::new().render(&doc, &ir).unwrap();
        assert!(with_cover.contains("cover:"));

        let options = RenderOptions::new().with_cover(false);
        let without = MarkdownRenderer::with_options(options)
            .render(&doc, &ir)
            .unwrap();
        assert!(!without.contains("cover:"));
    }
}
