//! Input document model.
//!
//! Mirrors the subset of the Docs API document resource that conversion
//! reads. Everything derives `Deserialize`, defaults missing fields and
//! ignores unknown ones, so raw `documents.get` responses load directly.

mod document;
mod paragraph;
mod resource;
mod table;

pub use document::{Block, Body, Document, DocumentStyle, Header, StructuralElement};
pub use paragraph::{
    Bullet, ElementKind, InlineObjectElement, Link, NamedStyleType, Paragraph, ParagraphElement,
    ParagraphStyle, TextRun, TextStyle,
};
pub use resource::{
    EmbeddedObject, ImageProperties, InlineObject, InlineObjectProperties, List, ListProperties,
    NestingLevel,
};
pub use table::{Table, TableCell, TableRow};
