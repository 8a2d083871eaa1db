//! Plan, Reiseziel und Reiseführer-Bilder.

use serde::{Deserialize, Serialize};

/// Reiseplan (oberste Ebene).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Plan {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
}

/// Reiseziel innerhalb eines Plans.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Destination {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

/// Hochgeladenes Bild eines Reiseführers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GuideImage {
    pub id: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl GuideImage {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            extra: serde_json::Map::new(),
        }
    }
}
