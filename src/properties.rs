//! Property Catalog - Read-Only Listing Records
//!
//! Listings are loaded from a static JSON document. Prices are stored in
//! THB and converted at the display boundary; the catalog itself never
//! changes after load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read property data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse property data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Contact channels for a listing. Every channel is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyContacts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// One real-estate listing as displayed in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyItem {
    pub name: String,
    pub description: String,
    /// Price in THB, the base currency.
    pub price: f64,
    /// Living area in square meters.
    pub area: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image filename reference, resolved by the presentation layer.
    pub image: String,
    #[serde(default)]
    pub contacts: PropertyContacts,
}

/// The loaded listing set, in file order.
#[derive(Debug, Clone)]
pub struct PropertyCatalog {
    items: Vec<PropertyItem>,
}

impl PropertyCatalog {
    /// Reads listings from a JSON array file.
    pub fn load_from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let items: Vec<PropertyItem> = serde_json::from_str(content)?;
        Ok(Self { items })
    }

    pub fn items(&self) -> &[PropertyItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
