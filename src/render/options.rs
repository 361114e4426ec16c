//! Rendering options and configuration.

use super::{CleanupOptions, Metadata};
use serde_yaml::Value;

/// Options for rendering a document to Markdown.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit the YAML front matter block
    pub include_frontmatter: bool,

    /// Put the cover descriptor under `cover` in the front matter
    pub include_cover: bool,

    /// Extra metadata appended after the document fields; same keys override
    pub extra_metadata: Metadata,

    /// Body text cleanup options
    pub cleanup: Option<CleanupOptions>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable front matter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Enable or disable the cover entry.
    pub fn with_cover(mut self, include: bool) -> Self {
        self.include_cover = include;
        self
    }

    /// Add an extra metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_metadata.insert(key, value);
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = Some(cleanup);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: super::CleanupPreset) -> Self {
        self.cleanup = Some(CleanupOptions::from_preset(preset));
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: true,
            include_cover: true,
            extra_metadata: Metadata::new(),
            cleanup: None,
        }
    }
}
