//! Folding consecutive bulleted paragraphs into list nodes.

use super::image::resolve_image;
use super::inline::{format_text_run, join_pieces};
use crate::error::{Error, Result};
use crate::ir::Node;
use crate::model::{Bullet, Document, ElementKind, Paragraph};

/// Holds the list currently being built.
///
/// Consecutive bullets sharing a list id extend the open list; anything else
/// closes it. Nested bullets are folded into the last item as an indented
/// line rather than a nested list.
#[derive(Debug, Default)]
pub struct ListAccumulator {
    open: Option<OpenList>,
}

#[derive(Debug)]
struct OpenList {
    list_id: String,
    ordered: bool,
    items: Vec<String>,
}

impl OpenList {
    fn marker(&self) -> &'static str {
        if self.ordered {
            "1. "
        } else {
            "- "
        }
    }

    fn into_node(self) -> Node {
        Node::list(self.ordered, self.items)
    }
}

impl ListAccumulator {
    /// Create an accumulator with no open list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a list is currently open.
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Number of top-level items in the open list.
    pub fn item_count(&self) -> usize {
        self.open.as_ref().map_or(0, |list| list.items.len())
    }

    /// Add a bulleted paragraph. Closing a list pushes its node onto `out`.
    pub fn push(
        &mut self,
        doc: &Document,
        paragraph: &Paragraph,
        bullet: &Bullet,
        out: &mut Vec<Node>,
    ) -> Result<()> {
        let content = bullet_content(doc, paragraph)?;

        match self.open.as_mut() {
            Some(list) if list.list_id == bullet.list_id => {
                let marker = list.marker();
                match (bullet.nested_level(), list.items.last_mut()) {
                    (Some(level), Some(last)) => {
                        last.push('\n');
                        last.push_str(&"  ".repeat(level as usize));
                        last.push_str(marker);
                        last.push_str(&content);
                    }
                    _ => list.items.push(content),
                }
            }
            _ => {
                self.close(out);
                self.open = Some(OpenList {
                    list_id: bullet.list_id.clone(),
                    ordered: is_ordered(doc, &bullet.list_id),
                    items: vec![content],
                });
            }
        }

        Ok(())
    }

    /// Close the open list, if any, pushing its node onto `out`.
    pub fn close(&mut self, out: &mut Vec<Node>) {
        if let Some(list) = self.open.take() {
            out.push(list.into_node());
        }
    }
}

fn is_ordered(doc: &Document, list_id: &str) -> bool {
    match doc.get_list(list_id) {
        Some(list) => list.is_ordered(),
        None => {
            log::warn!("List `{}` has no definition, rendering as unordered", list_id);
            false
        }
    }
}

/// Render the text of a list item. Images are inlined as Markdown image
/// syntax; an inline object that is not an image cannot be represented.
fn bullet_content(doc: &Document, paragraph: &Paragraph) -> Result<String> {
    let mut pieces = Vec::with_capacity(paragraph.elements.len());

    for element in &paragraph.elements {
        match element.kind() {
            ElementKind::Text(run) => pieces.push(format_text_run(run, false)),
            ElementKind::InlineObject(obj) => {
                let image = resolve_image(doc, obj)?.ok_or_else(|| {
                    Error::malformed(format!(
                        "inline object `{}` in a list item has no image properties",
                        obj.inline_object_id
                    ))
                })?;
                pieces.push(image.to_markdown());
            }
            ElementKind::Other => {}
        }
    }

    Ok(join_pieces(pieces))
}
