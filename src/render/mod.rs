//! Second stage: rendering intermediate nodes and metadata to Markdown.

mod cleanup;
mod frontmatter;
mod json;
mod markdown;
mod options;
mod result;

pub use cleanup::{CleanupOptions, CleanupPipeline, CleanupPreset};
pub use frontmatter::Metadata;
pub use json::{from_json, to_json, JsonFormat};
pub use markdown::{assemble, to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use options::RenderOptions;
pub use result::{ConversionStats, RenderResult};
