//! Metadata mapping and YAML front matter.

use crate::error::Result;
use crate::ir::Cover;
use crate::model::Document;
use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// Key/value metadata rendered as the YAML front matter block.
///
/// Keys keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Mapping);

impl Metadata {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the default metadata for a document: `title`, `documentId` and
    /// `cover`, each only when present.
    pub fn from_document(doc: &Document, cover: Option<&Cover>) -> Self {
        let mut metadata = Self::new();
        if let Some(ref title) = doc.title {
            metadata.insert("title", title.as_str());
        }
        if let Some(ref id) = doc.document_id {
            metadata.insert("documentId", id.as_str());
        }
        if let Some(cover) = cover {
            metadata.set_cover(cover);
        }
        metadata
    }

    /// Insert or replace a value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(Value::String(key.into()), value.into());
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set the title.
    pub fn with_title(self, title: impl Into<String>) -> Self {
        let title: String = title.into();
        self.with("title", title)
    }

    /// Set the cover as a nested `image`/`title`/`alt` mapping.
    pub fn with_cover(mut self, cover: &Cover) -> Self {
        self.set_cover(cover);
        self
    }

    fn set_cover(&mut self, cover: &Cover) {
        let mut value = Mapping::new();
        value.insert("image".into(), cover.image.as_str().into());
        value.insert("title".into(), cover.title.as_str().into());
        value.insert("alt".into(), cover.alt.as_str().into());
        self.insert("cover", Value::Mapping(value));
    }

    /// Copy every entry of `other` into this mapping. Existing keys keep
    /// their position and take the new value.
    pub fn extend(&mut self, other: &Metadata) {
        for (key, value) in other.0.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render the mapping as YAML, without a trailing newline.
    pub fn to_yaml(&self) -> Result<String> {
        let yaml = serde_yaml::to_string(&self.0)?;
        Ok(yaml.trim_end().to_string())
    }

    /// Render the delimited front matter block, ending in `---\n`.
    pub fn to_frontmatter(&self) -> Result<String> {
        Ok(format!("---\n{}\n---\n", self.to_yaml()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_yaml() {
        let metadata = Metadata::new().with_title("T");
        assert_eq!(metadata.to_yaml().unwrap(), "title: T");
        assert_eq!(metadata.to_frontmatter().unwrap(), "---\ntitle: T\n---\n");
    }

    #[test]
    fn test_insertion_order_kept() {
        let metadata = Metadata::new()
            .with("zeta", "last")
            .with("alpha", 1_i64)
            .with("draft", true);
        assert_eq!(
            metadata.to_yaml().unwrap(),
            "zeta: last\nalpha: 1\ndraft: true"
        );
    }

    #[test]
    fn test_from_document_with_cover() {
        let mut doc = Document::with_title("Report");
        doc.document_id = Some("doc-1".to_string());
        let cover = Cover {
            image: "https://img/c".to_string(),
            title: "Cover".to_string(),
            alt: String::new(),
        };

        let metadata = Metadata::from_document(&doc, Some(&cover));
        assert_eq!(metadata.len(), 3);
        assert_eq!(metadata.get("title"), Some(&Value::from("Report")));

        let yaml = metadata.to_yaml().unwrap();
        assert!(yaml.contains("documentId: doc-1"));
        assert!(yaml.contains("cover:\n  image: https://img/c\n  title: Cover"));
    }

    #[test]
    fn test_extend_overrides_in_place() {
        let mut metadata = Metadata::new().with_title("A").with("draft", true);
        metadata.extend(&Metadata::new().with_title("B").with("layout", "post"));
        assert_eq!(
            metadata.to_yaml().unwrap(),
            "title: B\ndraft: true\nlayout: post"
        );
    }

    #[test]
    fn test_from_document_without_fields() {
        let metadata = Metadata::from_document(&Document::new(), None);
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_special_characters_survive() {
        let metadata = Metadata::new().with_title("a: b # c");
        let yaml = metadata.to_yaml().unwrap();
        let parsed: Mapping = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed.get("title"), Some(&Value::from("a: b # c")));
    }
}
