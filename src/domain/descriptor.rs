//! Per-entity descriptor files from `<env>/Data/<Category>/`.

use serde::Deserialize;

use super::AppError;

/// The parts of an entity descriptor the extractor needs.
#[derive(Debug, Clone, Deserialize)]
pub struct EntityDescriptor {
    #[serde(rename = "Header")]
    pub header: Header,
    /// Script source text; empty for non-script entities.
    #[serde(rename = "konga.string", default)]
    pub konga_string: String,
}

/// Universal entity identification data.
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    #[serde(rename = "@ID")]
    pub id: String,
    #[serde(rename = "@Name", default)]
    pub name: String,
}

impl EntityDescriptor {
    /// Parse a descriptor; `source` names the file in error messages.
    pub fn parse(xml: &str, source: &str) -> Result<Self, AppError> {
        quick_xml::de::from_str(xml).map_err(|e| AppError::parse_error(source, e))
    }
}
