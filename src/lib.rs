//! # gdoc2md
//!
//! Convert Google Docs API documents into Markdown with YAML front matter.
//!
//! Conversion runs in two stages. [`convert`] walks the document body and
//! folds it into intermediate [`ir::Node`]s (headings, paragraphs, quotes,
//! lists, tables, images) and extracts a cover image from the first-page
//! header. [`render`] turns those nodes plus a metadata mapping into the final
//! text.
//!
//! ## Quick Start
//!
//! ```no_run
//! use gdoc2md::{parse_file, render};
//!
//! fn main() -> gdoc2md::Result<()> {
//!     // Load a `documents.get` response saved as JSON
//!     let doc = parse_file("document.json")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Structure**: headings 1-5, subtitle quotes, paragraphs, lists with
//!   nesting, tables, inline images
//! - **Styling**: bold, italic, underline, strikethrough and links
//! - **Cover image**: taken from the first-page header
//! - **Front matter**: title, document id and cover as YAML
//! - **Intermediate JSON**: `{cover, content}` for caching or inspection

pub mod convert;
pub mod error;
pub mod ir;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{DocumentWalker, ListAccumulator};
pub use error::{Error, Result};
pub use ir::{BlockTag, Cover, Image, Intermediate, Node, TableNode};
pub use model::{
    Bullet, Document, InlineObject, List, NamedStyleType, Paragraph, Table, TableCell, TableRow,
    TextRun, TextStyle,
};
pub use render::{
    CleanupOptions, CleanupPreset, ConversionStats, JsonFormat, Metadata, RenderOptions,
    RenderResult,
};

use std::io::Read;
use std::path::Path;

/// Parse a document from a JSON string.
///
/// # Example
///
/// ```
/// let doc = gdoc2md::parse_str(r#"{"title": "Notes", "body": {"content": []}}"#).unwrap();
/// assert_eq!(doc.title.as_deref(), Some("Notes"));
/// ```
pub fn parse_str(json: &str) -> Result<Document> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a document from JSON bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    Ok(serde_json::from_slice(data)?)
}

/// Parse a document from a reader.
///
/// # Example
///
/// ```no_run
/// use gdoc2md::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.json").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a document from a JSON file.
///
/// # Example
///
/// ```no_run
/// use gdoc2md::parse_file;
///
/// let doc = parse_file("document.json").unwrap();
/// println!("Blocks: {}", doc.blocks().len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = std::fs::read(path.as_ref())?;
    parse_bytes(&data)
}

/// Parse a document from a JSON file without blocking the runtime.
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(path: P) -> Result<Document> {
    let data = tokio::fs::read(path.as_ref()).await?;
    parse_bytes(&data)
}

/// Run the first stage only.
pub fn to_intermediate(doc: &Document) -> Result<Intermediate> {
    convert::convert(doc)
}

/// Convert a document JSON file to Markdown with default options.
///
/// # Example
///
/// ```no_run
/// use gdoc2md::to_markdown;
///
/// let markdown = to_markdown("document.json").unwrap();
/// std::fs::write("output.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a document JSON file to Markdown with custom options.
///
/// # Example
///
/// ```no_run
/// use gdoc2md::{to_markdown_with_options, RenderOptions};
///
/// let options = RenderOptions::new()
///     .with_cover(false)
///     .with_metadata("layout", "post");
/// let markdown = to_markdown_with_options("document.json", &options).unwrap();
/// ```
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Convert a document JSON file to intermediate JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&convert::convert(&doc)?, format)
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```no_run
/// use gdoc2md::Gdoc2md;
///
/// let markdown = Gdoc2md::new()
///     .with_metadata("layout", "post")
///     .without_cover()
///     .parse("document.json")?
///     .to_markdown()?;
/// # Ok::<(), gdoc2md::Error>(())
/// ```
pub struct Gdoc2md {
    render_options: RenderOptions,
}

impl Gdoc2md {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Omit the front matter block.
    pub fn without_frontmatter(mut self) -> Self {
        self.render_options = self.render_options.with_frontmatter(false);
        self
    }

    /// Omit the cover entry from the front matter.
    pub fn without_cover(mut self) -> Self {
        self.render_options = self.render_options.with_cover(false);
        self
    }

    /// Add an extra front matter entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let value: String = value.into();
        self.render_options = self.render_options.with_metadata(key, value);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Parse a document JSON file and convert it.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<Gdoc2mdResult> {
        self.finish(parse_file(path)?)
    }

    /// Parse a document from a JSON string and convert it.
    pub fn parse_str(self, json: &str) -> Result<Gdoc2mdResult> {
        self.finish(parse_str(json)?)
    }

    /// Parse a document from JSON bytes and convert it.
    pub fn parse_bytes(self, data: &[u8]) -> Result<Gdoc2mdResult> {
        self.finish(parse_bytes(data)?)
    }

    /// Convert an already parsed document.
    pub fn from_document(self, document: Document) -> Result<Gdoc2mdResult> {
        self.finish(document)
    }

    fn finish(self, document: Document) -> Result<Gdoc2mdResult> {
        let intermediate = convert::convert(&document)?;
        Ok(Gdoc2mdResult {
            document,
            intermediate,
            render_options: self.render_options,
        })
    }
}

impl Default for Gdoc2md {
    fn default() -> Self {
        Self::new()
    }
}

/// A converted document, ready to render.
pub struct Gdoc2mdResult {
    /// The parsed document
    pub document: Document,
    /// First-stage output
    pub intermediate: Intermediate,
    /// Render options to use
    render_options: RenderOptions,
}

impl Gdoc2mdResult {
    /// Render to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::MarkdownRenderer::with_options(self.render_options.clone())
            .render(&self.document, &self.intermediate)
    }

    /// Render to Markdown with conversion statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::MarkdownRenderer::with_options(self.render_options.clone())
            .render_with_stats(&self.document, &self.intermediate)
    }

    /// Serialize the intermediate representation.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.intermediate, format)
    }

    /// First-stage output.
    pub fn intermediate(&self) -> &Intermediate {
        &self.intermediate
    }

    /// The cover image, if any.
    pub fn cover(&self) -> Option<&Cover> {
        self.intermediate.cover.as_ref()
    }

    /// Node statistics without rendering.
    pub fn stats(&self) -> ConversionStats {
        ConversionStats::from_intermediate(&self.intermediate)
    }
}
