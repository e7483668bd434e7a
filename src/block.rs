use serde::{Deserialize, Serialize};

use crate::render;
use crate::rich_text::RichText;

/// A page content block. Only the kinds the card view displays are modeled;
/// everything else deserializes to `Unsupported` and renders to nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        paragraph: ParagraphValue,
    },
    Image {
        image: ImageValue,
    },
    #[serde(other)]
    Unsupported,
}

impl Block {
    /// Rendered body for block kinds that carry rich text.
    pub fn markdown(&self) -> Option<String> {
        match self {
            Block::Paragraph { paragraph } => Some(render::to_markdown(&paragraph.rich_text)),
            Block::Image { .. } | Block::Unsupported => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphValue {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

/// An image block's payload. The source is either an external URL or a
/// Notion-hosted file with an expiring URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageValue {
    #[serde(default)]
    pub caption: Vec<RichText>,
    #[serde(default)]
    pub external: Option<ExternalFile>,
    #[serde(default)]
    pub file: Option<HostedFile>,
}

impl ImageValue {
    pub fn url(&self) -> Option<&str> {
        self.external
            .as_ref()
            .map(|file| file.url.as_str())
            .or_else(|| self.file.as_ref().map(|file| file.url.as_str()))
    }

    pub fn caption_markdown(&self) -> String {
        render::to_markdown(&self.caption)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ExternalFile {
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostedFile {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<String>,
}
