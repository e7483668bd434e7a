use serde::{Deserialize, Serialize};

/// A single run of content with uniform formatting, as delivered in the
/// `rich_text` arrays of Notion page properties and blocks.
///
/// The enum is tagged the way the wire payload is, so a property value or
/// block caption deserializes directly into `Vec<RichText>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichText {
    Text {
        text: TextValue,
        #[serde(default)]
        annotations: Annotations,
        #[serde(default)]
        plain_text: String,
    },
    Equation {
        equation: EquationValue,
    },
    /// Span kinds this library does not render (mentions and the like).
    /// They deserialize without error and contribute no output.
    #[serde(other)]
    Unsupported,
}

impl RichText {
    pub fn text(content: impl Into<String>) -> Self {
        Self::styled(content, Annotations::default())
    }

    pub fn styled(content: impl Into<String>, annotations: Annotations) -> Self {
        let content = content.into();
        RichText::Text {
            plain_text: content.clone(),
            text: TextValue {
                content,
                link: None,
            },
            annotations,
        }
    }

    pub fn equation(expression: impl Into<String>) -> Self {
        RichText::Equation {
            equation: EquationValue {
                expression: expression.into(),
            },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextValue {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub link: Option<Link>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub url: String,
}

/// Style flags attached to a text span. The flags are independent; `code`
/// takes precedence over the others when rendering.
///
/// `underline` and `color` are carried so payloads round-trip, but the
/// Markdown renderer ignores them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: default_color(),
        }
    }
}

fn default_color() -> String {
    "default".to_string()
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EquationValue {
    #[serde(default)]
    pub expression: String,
}
