use anyhow::Result;
use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::property::{Property, PropertyValue, TextMode};

#[derive(Error, Debug)]
pub enum PageError {
    #[error("invalid page payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// One database entry, as returned by a query. Property order is the
/// database's column order, so it is kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: LinkedHashMap<String, Property>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Page {
    pub fn from_value(value: Value) -> Result<Self, PageError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }

    /// Extract a named property, `None` when the property is missing, unset
    /// or of an unsupported kind.
    pub fn value(&self, name: &str, mode: TextMode) -> Option<PropertyValue> {
        self.property(name).and_then(|prop| prop.value(mode))
    }

    /// The first title-kind property, rendered. `None` when the page has no
    /// title property or its text is empty.
    pub fn title(&self, mode: TextMode) -> Option<String> {
        self.properties
            .values()
            .find(|prop| prop.is_title())
            .and_then(|prop| prop.value(mode))
            .and_then(|value| match value {
                PropertyValue::Text(text) if !text.is_empty() => Some(text),
                _ => None,
            })
    }
}

impl TryFrom<&str> for Page {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(value)?)
    }
}
