use serde::{Deserialize, Serialize};

use crate::render;
use crate::rich_text::RichText;

/// Which renderer runs over `title` and `rich_text` payloads during
/// extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextMode {
    #[default]
    Markdown,
    Plain,
}

impl TextMode {
    pub fn render(self, spans: &[RichText]) -> String {
        match self {
            TextMode::Markdown => render::to_markdown(spans),
            TextMode::Plain => render::to_plain_text(spans),
        }
    }
}

/// A page property value, tagged by its declared kind.
///
/// One variant per supported kind; everything else lands in `Unsupported`
/// and extracts to absence rather than failing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Property {
    Title {
        title: Vec<RichText>,
    },
    RichText {
        rich_text: Vec<RichText>,
    },
    Select {
        #[serde(default)]
        select: Option<SelectOption>,
    },
    MultiSelect {
        #[serde(default)]
        multi_select: Vec<SelectOption>,
    },
    Relation {
        #[serde(default)]
        relation: Vec<PageRef>,
    },
    Checkbox {
        #[serde(default)]
        checkbox: bool,
    },
    Rollup {
        rollup: Rollup,
    },
    #[serde(other)]
    Unsupported,
}

impl Property {
    /// Extract a uniform value from the property.
    ///
    /// Returns `None` for unsupported kinds and unset selects.
    pub fn value(&self, mode: TextMode) -> Option<PropertyValue> {
        match self {
            Property::Title { title } => Some(PropertyValue::Text(mode.render(title))),
            Property::RichText { rich_text } => Some(PropertyValue::Text(mode.render(rich_text))),
            Property::Select { select } => select
                .as_ref()
                .map(|option| PropertyValue::Text(option.name.clone())),
            Property::MultiSelect { multi_select } => Some(PropertyValue::List(
                multi_select.iter().map(|option| option.name.clone()).collect(),
            )),
            Property::Relation { relation } => Some(PropertyValue::List(
                relation.iter().map(|page| page.id.clone()).collect(),
            )),
            Property::Checkbox { checkbox } => Some(PropertyValue::Bool(*checkbox)),
            Property::Rollup { rollup } => Some(PropertyValue::List(rollup.values(mode))),
            Property::Unsupported => None,
        }
    }

    pub fn is_title(&self) -> bool {
        matches!(self, Property::Title { .. })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub id: String,
}

/// A rollup aggregates property values from related pages. Only the `array`
/// aggregation carries values this library can render; other aggregations
/// extract to an empty list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Rollup {
    Array {
        array: Vec<Property>,
    },
    #[serde(other)]
    Unsupported,
}

impl Rollup {
    fn values(&self, mode: TextMode) -> Vec<String> {
        match self {
            Rollup::Array { array } => array
                .iter()
                .filter_map(|item| match item {
                    Property::Title { title } => Some(mode.render(title)),
                    Property::RichText { rich_text } => Some(mode.render(rich_text)),
                    _ => None,
                })
                .collect(),
            Rollup::Unsupported => Vec::new(),
        }
    }
}

/// The uniform shape property extraction produces.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum PropertyValue {
    Text(String),
    List(Vec<String>),
    Bool(bool),
}

impl PropertyValue {
    /// Normalize to a list: lists pass through, non-empty text becomes a
    /// one-element list, everything else is empty.
    pub fn into_list(self) -> Vec<String> {
        match self {
            PropertyValue::List(values) => values,
            PropertyValue::Text(value) => {
                if value.is_empty() {
                    Vec::new()
                } else {
                    vec![value]
                }
            }
            PropertyValue::Bool(_) => Vec::new(),
        }
    }

    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Text(value) => !value.is_empty(),
            PropertyValue::List(values) => !values.is_empty(),
            PropertyValue::Bool(value) => *value,
        }
    }
}
