//! Registry types referenced from paragraph content: inline objects and
//! list definitions.

use serde::{Deserialize, Serialize};

/// An entry in the document's inline object registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObject {
    /// Inline object id
    pub object_id: Option<String>,

    /// Object properties
    pub inline_object_properties: InlineObjectProperties,
}

impl InlineObject {
    /// Create an image object.
    pub fn image(
        content_uri: impl Into<String>,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            object_id: None,
            inline_object_properties: InlineObjectProperties {
                embedded_object: EmbeddedObject {
                    title: title.map(str::to_string),
                    description: description.map(str::to_string),
                    image_properties: Some(ImageProperties {
                        content_uri: Some(content_uri.into()),
                    }),
                },
            },
        }
    }

    /// Create an object that is not an image (a drawing, a chart...).
    pub fn without_image() -> Self {
        Self::default()
    }

    /// The embedded payload.
    pub fn embedded(&self) -> &EmbeddedObject {
        &self.inline_object_properties.embedded_object
    }
}

/// Properties of an inline object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InlineObjectProperties {
    /// The embedded object
    pub embedded_object: EmbeddedObject,
}

/// An embedded resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmbeddedObject {
    /// Title
    pub title: Option<String>,

    /// Description, used as alt text
    pub description: Option<String>,

    /// Present when the object is an image
    pub image_properties: Option<ImageProperties>,
}

/// Image-specific properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProperties {
    /// Short-lived URI for the rendered image
    pub content_uri: Option<String>,
}

/// A list definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct List {
    /// List properties
    pub list_properties: ListProperties,
}

impl List {
    /// A numbered list (decimal glyph at level 0).
    pub fn ordered() -> Self {
        Self {
            list_properties: ListProperties {
                nesting_levels: vec![NestingLevel {
                    glyph_type: Some("DECIMAL".to_string()),
                    glyph_symbol: None,
                }],
            },
        }
    }

    /// A bulleted list (symbol glyph at level 0).
    pub fn unordered() -> Self {
        Self {
            list_properties: ListProperties {
                nesting_levels: vec![NestingLevel {
                    glyph_type: None,
                    glyph_symbol: Some("●".to_string()),
                }],
            },
        }
    }

    /// Whether level 0 carries a glyph type, which makes the list numbered.
    pub fn is_ordered(&self) -> bool {
        self.list_properties
            .nesting_levels
            .first()
            .is_some_and(|level| level.glyph_type.is_some())
    }
}

/// List properties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListProperties {
    /// Per-level bullet definitions, index = nesting level
    pub nesting_levels: Vec<NestingLevel>,
}

/// Bullet definition for one nesting level.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NestingLevel {
    /// Numbering glyph type (DECIMAL, ALPHA, ROMAN...)
    pub glyph_type: Option<String>,

    /// Bullet symbol for unordered levels
    pub glyph_symbol: Option<String>,
}
