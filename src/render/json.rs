//! JSON serialization of the intermediate representation.

use crate::error::Result;
use crate::ir::Intermediate;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Serialize an intermediate representation as `{cover, content}` JSON.
pub fn to_json(ir: &Intermediate, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(ir)?,
        JsonFormat::Compact => serde_json::to_string(ir)?,
    };
    Ok(json)
}

/// Load an intermediate representation previously written by [`to_json`].
pub fn from_json(json: &str) -> Result<Intermediate> {
    Ok(serde_json::from_str(json)?)
}
