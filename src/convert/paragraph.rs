//! Non-list paragraph rendering.

use super::image::resolve_image;
use super::inline::{format_text_run, join_pieces};
use crate::error::Result;
use crate::ir::{BlockTag, Image, Node};
use crate::model::{Document, ElementKind, NamedStyleType, Paragraph};

/// Output tag for a named style. Styles without a Markdown counterpart
/// return `None` and the paragraph is dropped.
pub fn block_tag(style: NamedStyleType) -> Option<BlockTag> {
    match style {
        NamedStyleType::NormalText => Some(BlockTag::P),
        NamedStyleType::Subtitle => Some(BlockTag::Blockquote),
        NamedStyleType::Heading1 => Some(BlockTag::H1),
        NamedStyleType::Heading2 => Some(BlockTag::H2),
        NamedStyleType::Heading3 => Some(BlockTag::H3),
        NamedStyleType::Heading4 => Some(BlockTag::H4),
        NamedStyleType::Heading5 => Some(BlockTag::H5),
        NamedStyleType::Title
        | NamedStyleType::Heading6
        | NamedStyleType::Unspecified
        | NamedStyleType::Unknown => None,
    }
}

enum Item {
    Text(String),
    Image(Image),
}

/// Render a paragraph that is not a list item.
///
/// Text runs collapse into a single node unless an image sits among them,
/// in which case every text run and image becomes its own node in order.
pub fn render_paragraph(doc: &Document, paragraph: &Paragraph, out: &mut Vec<Node>) -> Result<()> {
    let Some(tag) = block_tag(paragraph.named_style()) else {
        log::debug!(
            "Dropping paragraph with unsupported style {:?}",
            paragraph.named_style()
        );
        return Ok(());
    };
    let in_heading = tag.is_heading_context();

    let mut items = Vec::with_capacity(paragraph.elements.len());
    for element in &paragraph.elements {
        match element.kind() {
            ElementKind::InlineObject(obj) => {
                if let Some(image) = resolve_image(doc, obj)? {
                    items.push(Item::Image(image));
                }
            }
            ElementKind::Text(run) if !run.is_newline_only() => {
                items.push(Item::Text(format_text_run(run, in_heading)));
            }
            ElementKind::Text(_) | ElementKind::Other => {}
        }
    }

    let has_images = items.iter().any(|i| matches!(i, Item::Image(_)));
    if !has_images {
        let text = join_pieces(items.iter().filter_map(|i| match i {
            Item::Text(t) => Some(t.as_str()),
            Item::Image(_) => None,
        }));
        if !text.is_empty() {
            out.push(Node::text(tag, text));
        }
        return Ok(());
    }

    for item in items {
        match item {
            Item::Text(text) if !text.is_empty() => out.push(Node::text(tag, text)),
            Item::Text(_) => {}
            Item::Image(image) => out.push(Node::Img(image)),
        }
    }
    Ok(())
}
