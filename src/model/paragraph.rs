//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Paragraph {
    /// Inline elements in order
    pub elements: Vec<ParagraphElement>,

    /// Paragraph style
    pub paragraph_style: ParagraphStyle,

    /// List membership, if this paragraph is a list item
    pub bullet: Option<Bullet>,
}

impl Paragraph {
    /// Create a new empty paragraph with the given named style.
    pub fn new(style: NamedStyleType) -> Self {
        Self {
            elements: Vec::new(),
            paragraph_style: ParagraphStyle {
                named_style_type: style,
            },
            bullet: None,
        }
    }

    /// Create a normal-text paragraph with a single plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new(NamedStyleType::NormalText);
        p.add_run(TextRun::new(text));
        p
    }

    /// Create a heading paragraph (levels 1-6).
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        let mut p = Self::new(NamedStyleType::heading(level));
        p.add_run(TextRun::new(text));
        p
    }

    /// Make this paragraph a list item.
    pub fn with_bullet(mut self, list_id: impl Into<String>, nesting_level: Option<u32>) -> Self {
        self.bullet = Some(Bullet {
            list_id: list_id.into(),
            nesting_level,
        });
        self
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.elements.push(ParagraphElement::text(run));
    }

    /// Add an inline object reference.
    pub fn add_inline_object(&mut self, id: impl Into<String>) {
        self.elements.push(ParagraphElement::inline_object(id));
    }

    /// The named style of this paragraph.
    pub fn named_style(&self) -> NamedStyleType {
        self.paragraph_style.named_style_type
    }

    /// Concatenated raw text of all runs, without styling.
    pub fn raw_text(&self) -> String {
        self.elements
            .iter()
            .filter_map(|e| e.text_run.as_ref())
            .map(|run| run.content.as_str())
            .collect()
    }
}

/// Paragraph styling properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphStyle {
    /// Named style applied to the paragraph
    pub named_style_type: NamedStyleType,
}

/// Named paragraph styles defined by the Docs API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamedStyleType {
    /// No style set
    #[default]
    #[serde(rename = "NAMED_STYLE_TYPE_UNSPECIFIED")]
    Unspecified,
    /// Body text
    #[serde(rename = "NORMAL_TEXT")]
    NormalText,
    /// Document title
    #[serde(rename = "TITLE")]
    Title,
    /// Subtitle
    #[serde(rename = "SUBTITLE")]
    Subtitle,
    /// Heading 1
    #[serde(rename = "HEADING_1")]
    Heading1,
    /// Heading 2
    #[serde(rename = "HEADING_2")]
    Heading2,
    /// Heading 3
    #[serde(rename = "HEADING_3")]
    Heading3,
    /// Heading 4
    #[serde(rename = "HEADING_4")]
    Heading4,
    /// Heading 5
    #[serde(rename = "HEADING_5")]
    Heading5,
    /// Heading 6
    #[serde(rename = "HEADING_6")]
    Heading6,
    /// Any value this crate does not know about
    #[serde(other)]
    Unknown,
}

impl NamedStyleType {
    /// Heading style for a level, clamped to 1-6.
    pub fn heading(level: u8) -> Self {
        match level.clamp(1, 6) {
            1 => Self::Heading1,
            2 => Self::Heading2,
            3 => Self::Heading3,
            4 => Self::Heading4,
            5 => Self::Heading5,
            _ => Self::Heading6,
        }
    }
}

/// List membership of a paragraph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bullet {
    /// Id of the list this paragraph belongs to
    pub list_id: String,

    /// Zero-based nesting depth; the API omits it for level 0
    pub nesting_level: Option<u32>,
}

impl Bullet {
    /// Nesting depth when the item is nested below the top level.
    pub fn nested_level(&self) -> Option<u32> {
        self.nesting_level.filter(|level| *level > 0)
    }
}

/// An inline element of a paragraph. At most one payload is set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParagraphElement {
    /// Styled text
    pub text_run: Option<TextRun>,

    /// Reference to an entry in `Document::inline_objects`
    pub inline_object_element: Option<InlineObjectElement>,
}

impl ParagraphElement {
    /// Create a text run element.
    pub fn text(run: TextRun) -> Self {
        Self {
            text_run: Some(run),
            inline_object_element: None,
        }
    }

    /// Create an inline object element.
    pub fn inline_object(id: impl Into<String>) -> Self {
        Self {
            text_run: None,
            inline_object_element: Some(InlineObjectElement {
                inline_object_id: id.into(),
            }),
        }
    }

    /// Classify this element.
    pub fn kind(&self) -> ElementKind<'_> {
        match (&self.text_run, &self.inline_object_element) {
            (Some(run), _) => ElementKind::Text(run),
            (None, Some(obj)) => ElementKind::InlineObject(obj),
            (None, None) => ElementKind::Other,
        }
    }
}

/// Borrowed view of a paragraph element.
#[derive(Debug, Clone, Copy)]
pub enum ElementKind<'a> {
    /// A styled text run
    Text(&'a TextRun),
    /// An inline object reference
    InlineObject(&'a InlineObjectElement),
    /// Page breaks, footnote references, equations and the like
    Other,
}

/// Reference to an inline object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObjectElement {
    /// Key into `Document::inline_objects`
    pub inline_object_id: String,
}

/// A run of text with consistent styling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextRun {
    /// The text content, usually ending with `\n` at paragraph end
    pub content: String,

    /// Text styling
    pub text_style: TextStyle,
}

impl TextRun {
    /// Create a new text run with default style.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            text_style: TextStyle::default(),
        }
    }

    /// Create a text run with the given style.
    pub fn styled(content: impl Into<String>, text_style: TextStyle) -> Self {
        Self {
            content: content.into(),
            text_style,
        }
    }

    /// Whether the run holds nothing but line breaks.
    pub fn is_newline_only(&self) -> bool {
        self.content.chars().all(|c| c == '\n')
    }
}

/// Character styling. Absent flags deserialize as `false`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Strikethrough text
    pub strikethrough: bool,

    /// Hyperlink target
    pub link: Option<Link>,
}

impl TextStyle {
    /// Set bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set italic.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Set underline.
    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    /// Set strikethrough.
    pub fn strikethrough(mut self) -> Self {
        self.strikethrough = true;
        self
    }

    /// Link to a URL.
    pub fn link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(Link {
            url: Some(url.into()),
        });
        self
    }

    /// The link URL, if the run is hyperlinked to one.
    pub fn link_url(&self) -> Option<&str> {
        self.link.as_ref().and_then(|l| l.url.as_deref())
    }
}

/// A hyperlink.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    /// External URL; bookmark and heading links carry none
    pub url: Option<String>,
}
