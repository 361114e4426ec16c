//! Inline image resolution and cover extraction.

use crate::error::{Error, Result};
use crate::ir::{Cover, Image};
use crate::model::{Document, ElementKind, InlineObjectElement};

/// Resolve an inline object reference to an image.
///
/// Returns `Ok(None)` when the object exists but is not an image. A
/// reference with no entry in the registry is a malformed document.
pub fn resolve_image(doc: &Document, element: &InlineObjectElement) -> Result<Option<Image>> {
    let id = &element.inline_object_id;
    let object = doc.get_inline_object(id).ok_or_else(|| {
        Error::malformed(format!("inline object `{}` is not in inlineObjects", id))
    })?;

    let embedded = object.embedded();
    let Some(props) = embedded.image_properties.as_ref() else {
        log::debug!("Inline object `{}` has no image properties", id);
        return Ok(None);
    };

    Ok(Some(Image {
        source: props.content_uri.clone().unwrap_or_default(),
        title: embedded.title.clone().unwrap_or_default(),
        alt: embedded.description.clone().unwrap_or_default(),
    }))
}

/// Extract the cover image from the first-page header.
///
/// Only the first element of the header's first paragraph is considered.
pub fn extract_cover(doc: &Document) -> Result<Option<Cover>> {
    let Some(header) = doc.first_page_header() else {
        return Ok(None);
    };
    let Some(first) = header.first_paragraph().and_then(|p| p.elements.first()) else {
        return Ok(None);
    };

    match first.kind() {
        ElementKind::InlineObject(element) => Ok(resolve_image(doc, element)?.map(Cover::from)),
        ElementKind::Text(_) | ElementKind::Other => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Header, InlineObject, Paragraph};

    fn element(id: &str) -> InlineObjectElement {
        InlineObjectElement {
            inline_object_id: id.to_string(),
        }
    }

    #[test]
    fn test_resolve_image_defaults() {
        let mut doc = Document::new();
        doc.add_inline_object("kix.1", InlineObject::image("https://img/1", None, None));

        let image = resolve_image(&doc, &element("kix.1")).unwrap().unwrap();
        assert_eq!(image, Image::new("https://img/1", "", ""));
    }

    #[test]
    fn test_resolve_image_title_and_alt() {
        let mut doc = Document::new();
        doc.add_inline_object(
            "kix.1",
            InlineObject::image("https://img/1", Some("Chart"), Some("Sales by month")),
        );

        let image = resolve_image(&doc, &element("kix.1")).unwrap().unwrap();
        assert_eq!(image.title, "Chart");
        assert_eq!(image.alt, "Sales by month");
    }

    #[test]
    fn test_resolve_non_image() {
        let mut doc = Document::new();
        doc.add_inline_object("kix.1", InlineObject::without_image());
        assert!(resolve_image(&doc, &element("kix.1")).unwrap().is_none());
    }

    #[test]
    fn test_resolve_dangling_reference() {
        let doc = Document::new();
        let err = resolve_image(&doc, &element("kix.missing")).unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }

    #[test]
    fn test_cover_without_header_reference() {
        let doc = Document::new();
        assert!(extract_cover(&doc).unwrap().is_none());
    }

    #[test]
    fn test_cover_from_first_page_header() {
        let mut doc = Document::new();
        doc.add_inline_object("kix.c", InlineObject::image("https://img/c", Some("C"), None));
        let mut para = Paragraph::default();
        para.add_inline_object("kix.c");
        doc.set_first_page_header("kix.h", Header::with_paragraphs([para]));

        let cover = extract_cover(&doc).unwrap().unwrap();
        assert_eq!(
            cover,
            Cover {
                image: "https://img/c".to_string(),
                title: "C".to_string(),
                alt: String::new(),
            }
        );
    }

    #[test]
    fn test_cover_requires_leading_image() {
        let mut doc = Document::new();
        doc.add_inline_object("kix.c", InlineObject::image("https://img/c", None, None));
        let mut para = Paragraph::with_text("Company name");
        para.add_inline_object("kix.c");
        doc.set_first_page_header("kix.h", Header::with_paragraphs([para]));

        assert!(extract_cover(&doc).unwrap().is_none());
    }

    #[test]
    fn test_cover_empty_header() {
        let mut doc = Document::new();
        doc.set_first_page_header("kix.h", Header::default());
        assert!(extract_cover(&doc).unwrap().is_none());
    }
}
