//! Intermediate representation between document walking and Markdown
//! rendering.
//!
//! The serde shapes are the stable JSON contract between the two stages:
//! `{"cover": ..., "content": [{"h1": "..."}, {"ul": [...]}, ...]}`.

use serde::{Deserialize, Serialize};

/// Output tag for a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockTag {
    /// Plain paragraph
    P,
    /// Block quote
    Blockquote,
    /// Heading 1
    H1,
    /// Heading 2
    H2,
    /// Heading 3
    H3,
    /// Heading 4
    H4,
    /// Heading 5
    H5,
}

impl BlockTag {
    /// Heading level for heading tags.
    pub fn heading_level(self) -> Option<u8> {
        match self {
            BlockTag::H1 => Some(1),
            BlockTag::H2 => Some(2),
            BlockTag::H3 => Some(3),
            BlockTag::H4 => Some(4),
            BlockTag::H5 => Some(5),
            BlockTag::P | BlockTag::Blockquote => None,
        }
    }

    /// Every tag except `p` renders its own visual weight.
    pub fn is_heading_context(self) -> bool {
        self != BlockTag::P
    }
}

/// One Markdown-shaped node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    /// Paragraph text
    P(String),
    /// Quoted text
    Blockquote(String),
    /// Heading 1
    H1(String),
    /// Heading 2
    H2(String),
    /// Heading 3
    H3(String),
    /// Heading 4
    H4(String),
    /// Heading 5
    H5(String),
    /// Standalone image
    Img(Image),
    /// Unordered list; nested lines are folded into item strings
    Ul(Vec<String>),
    /// Ordered list; nested lines are folded into item strings
    Ol(Vec<String>),
    /// Table
    Table(TableNode),
}

impl Node {
    /// Build a text node for a tag.
    pub fn text(tag: BlockTag, text: impl Into<String>) -> Self {
        let text = text.into();
        match tag {
            BlockTag::P => Node::P(text),
            BlockTag::Blockquote => Node::Blockquote(text),
            BlockTag::H1 => Node::H1(text),
            BlockTag::H2 => Node::H2(text),
            BlockTag::H3 => Node::H3(text),
            BlockTag::H4 => Node::H4(text),
            BlockTag::H5 => Node::H5(text),
        }
    }

    /// Build a list node.
    pub fn list(ordered: bool, items: Vec<String>) -> Self {
        if ordered {
            Node::Ol(items)
        } else {
            Node::Ul(items)
        }
    }

    /// Tag and text for text nodes.
    pub fn as_text(&self) -> Option<(BlockTag, &str)> {
        match self {
            Node::P(t) => Some((BlockTag::P, t)),
            Node::Blockquote(t) => Some((BlockTag::Blockquote, t)),
            Node::H1(t) => Some((BlockTag::H1, t)),
            Node::H2(t) => Some((BlockTag::H2, t)),
            Node::H3(t) => Some((BlockTag::H3, t)),
            Node::H4(t) => Some((BlockTag::H4, t)),
            Node::H5(t) => Some((BlockTag::H5, t)),
            Node::Img(_) | Node::Ul(_) | Node::Ol(_) | Node::Table(_) => None,
        }
    }
}

/// A displayable image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL
    pub source: String,
    /// Title, empty when absent
    pub title: String,
    /// Alt text, empty when absent
    pub alt: String,
}

impl Image {
    /// Create an image descriptor.
    pub fn new(
        source: impl Into<String>,
        title: impl Into<String>,
        alt: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            title: title.into(),
            alt: alt.into(),
        }
    }

    /// Inline Markdown image syntax.
    pub fn to_markdown(&self) -> String {
        if self.title.is_empty() {
            format!("![{}]({})", self.alt, self.source)
        } else {
            format!(
                "![{}]({} \"{}\")",
                self.alt,
                self.source,
                self.title.replace('"', "\\\"")
            )
        }
    }
}

/// A flattened table: first row as headers, the rest as body rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableNode {
    /// Header cell texts
    pub headers: Vec<String>,
    /// Body rows
    pub rows: Vec<Vec<String>>,
}

/// Cover image descriptor taken from the first-page header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cover {
    /// Image URL
    pub image: String,
    /// Title, empty when absent
    pub title: String,
    /// Alt text, empty when absent
    pub alt: String,
}

impl From<Image> for Cover {
    fn from(image: Image) -> Self {
        Self {
            image: image.source,
            title: image.title,
            alt: image.alt,
        }
    }
}

/// Output of the first stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Intermediate {
    /// Cover image, `null` when the document has none
    pub cover: Option<Cover>,
    /// Nodes in document order
    pub content: Vec<Node>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_json_shape() {
        let nodes = vec![
            Node::text(BlockTag::H1, "Hello"),
            Node::Ul(vec!["a".to_string()]),
            Node::Img(Image::new("u", "", "")),
            Node::Table(TableNode {
                headers: vec!["h".to_string()],
                rows: vec![],
            }),
        ];
        let value = serde_json::to_value(&nodes).unwrap();
        assert_eq!(
            value,
            json!([
                {"h1": "Hello"},
                {"ul": ["a"]},
                {"img": {"source": "u", "title": "", "alt": ""}},
                {"table": {"headers": ["h"], "rows": []}}
            ])
        );
    }

    #[test]
    fn test_intermediate_null_cover() {
        let value = serde_json::to_value(Intermediate::default()).unwrap();
        assert_eq!(value, json!({"cover": null, "content": []}));
    }

    #[test]
    fn test_cover_from_image() {
        let cover = Cover::from(Image::new("https://x/c.png", "Cover", "A cover"));
        assert_eq!(cover.image, "https://x/c.png");
        assert_eq!(
            serde_json::to_value(&cover).unwrap(),
            json!({"image": "https://x/c.png", "title": "Cover", "alt": "A cover"})
        );
    }

    #[test]
    fn test_image_markdown() {
        assert_eq!(Image::new("a.png", "", "alt").to_markdown(), "![alt](a.png)");
        assert_eq!(
            Image::new("a.png", "T", "").to_markdown(),
            "![](a.png \"T\")"
        );
    }

    #[test]
    fn test_tag_heading_context() {
        assert!(!BlockTag::P.is_heading_context());
        assert!(BlockTag::Blockquote.is_heading_context());
        assert_eq!(BlockTag::H3.heading_level(), Some(3));
    }
}
