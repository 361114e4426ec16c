//! Document-level types.

use super::{InlineObject, List, Paragraph, Table};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A document as returned by the Docs API `documents.get` call.
///
/// Only the fields the converter reads are modeled; anything else in the
/// JSON is ignored during deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    /// Document identifier
    pub document_id: Option<String>,

    /// Document title
    pub title: Option<String>,

    /// Main body
    pub body: Body,

    /// List definitions keyed by list id
    pub lists: HashMap<String, List>,

    /// Inline object registry keyed by inline object id
    pub inline_objects: HashMap<String, InlineObject>,

    /// Headers keyed by header id
    pub headers: HashMap<String, Header>,

    /// Document-wide style
    pub document_style: DocumentStyle,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Append a paragraph block to the body.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.content.push(StructuralElement::paragraph(paragraph));
    }

    /// Append a table block to the body.
    pub fn add_table(&mut self, table: Table) {
        self.body.content.push(StructuralElement::table(table));
    }

    /// Register a list definition.
    pub fn add_list(&mut self, id: impl Into<String>, list: List) {
        self.lists.insert(id.into(), list);
    }

    /// Register an inline object.
    pub fn add_inline_object(&mut self, id: impl Into<String>, object: InlineObject) {
        self.inline_objects.insert(id.into(), object);
    }

    /// Register a header and make it the first-page header.
    pub fn set_first_page_header(&mut self, id: impl Into<String>, header: Header) {
        let id = id.into();
        self.headers.insert(id.clone(), header);
        self.document_style.first_page_header_id = Some(id);
    }

    /// Get a list definition by id.
    pub fn get_list(&self, id: &str) -> Option<&List> {
        self.lists.get(id)
    }

    /// Get an inline object by id.
    pub fn get_inline_object(&self, id: &str) -> Option<&InlineObject> {
        self.inline_objects.get(id)
    }

    /// The header referenced by `documentStyle.firstPageHeaderId`, if any.
    pub fn first_page_header(&self) -> Option<&Header> {
        let id = self.document_style.first_page_header_id.as_deref()?;
        let header = self.headers.get(id);
        if header.is_none() {
            log::warn!("First-page header `{}` is not present in headers", id);
        }
        header
    }

    /// Top-level content blocks in document order.
    pub fn blocks(&self) -> &[StructuralElement] {
        &self.body.content
    }

    /// Check if the body has no content blocks.
    pub fn is_empty(&self) -> bool {
        self.body.content.is_empty()
    }
}

/// The document body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Body {
    /// Ordered content blocks
    pub content: Vec<StructuralElement>,
}

/// A page header.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    /// Header identifier
    pub header_id: Option<String>,

    /// Header content blocks
    pub content: Vec<StructuralElement>,
}

impl Header {
    /// Create a header from paragraphs.
    pub fn with_paragraphs(paragraphs: impl IntoIterator<Item = Paragraph>) -> Self {
        Self {
            header_id: None,
            content: paragraphs
                .into_iter()
                .map(StructuralElement::paragraph)
                .collect(),
        }
    }

    /// The first paragraph in the header content.
    pub fn first_paragraph(&self) -> Option<&Paragraph> {
        self.content.iter().find_map(|e| e.paragraph.as_ref())
    }
}

/// Document-wide style properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DocumentStyle {
    /// Header shown on the first page only
    pub first_page_header_id: Option<String>,
}

/// A content block. At most one of the payload fields is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuralElement {
    /// Paragraph payload
    pub paragraph: Option<Paragraph>,

    /// Table payload
    pub table: Option<Table>,

    /// Section break payload (not converted)
    pub section_break: Option<serde_json::Value>,

    /// Table of contents payload (not converted)
    pub table_of_contents: Option<serde_json::Value>,
}

impl StructuralElement {
    /// Create a paragraph block.
    pub fn paragraph(paragraph: Paragraph) -> Self {
        Self {
            paragraph: Some(paragraph),
            ..Self::default()
        }
    }

    /// Create a table block.
    pub fn table(table: Table) -> Self {
        Self {
            table: Some(table),
            ..Self::default()
        }
    }

    /// Classify this block.
    pub fn block(&self) -> Block<'_> {
        match (&self.paragraph, &self.table) {
            (Some(p), _) => Block::Paragraph(p),
            (None, Some(t)) => Block::Table(t),
            (None, None) => Block::Other,
        }
    }
}

/// Borrowed view of a content block.
#[derive(Debug, Clone, Copy)]
pub enum Block<'a> {
    /// A paragraph, possibly a list item
    Paragraph(&'a Paragraph),
    /// A table
    Table(&'a Table),
    /// Section breaks, tables of contents and anything unrecognized
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert!(doc.first_page_header().is_none());
    }

    #[test]
    fn test_deserialize_ignores_unknown_fields() {
        let json = r#"{
            "documentId": "abc",
            "title": "Doc",
            "revisionId": "r1",
            "body": { "content": [ { "startIndex": 1, "sectionBreak": {} } ] }
        }"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.document_id.as_deref(), Some("abc"));
        assert_eq!(doc.blocks().len(), 1);
        assert!(matches!(doc.blocks()[0].block(), Block::Other));
    }

    #[test]
    fn test_first_page_header_missing_entry() {
        let mut doc = Document::new();
        doc.document_style.first_page_header_id = Some("kix.h1".to_string());
        assert!(doc.first_page_header().is_none());

        doc.set_first_page_header("kix.h1", Header::default());
        assert!(doc.first_page_header().is_some());
    }
}
