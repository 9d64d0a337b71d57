//! Common part model used in both requests and responses.

use serde::{Deserialize, Serialize};

/// A single fragment of a multimodal message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// A text part containing a string value
    Text {
        /// The text content of the part
        text: String,
        /// Whether the text is part of the model's reasoning rather than its answer
        #[serde(default, skip_serializing_if = "Option::is_none")]
        thought: Option<bool>,
    },
    /// A part containing inline data
    InlineData {
        /// The inline data content of the part
        #[serde(rename = "inlineData", alias = "inline_data")]
        inline_data: InlineData,
    },
    /// Any other part kind returned by the API (function calls, file data, ...)
    Other(serde_json::Value),
}

/// A MIME-typed, base64-encoded binary payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// The MIME type of the inline data
    #[serde(alias = "mime_type")]
    pub mime_type: String,
    /// The base64 encoded payload
    pub data: String,
}

impl Part {
    /// Creates a new text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text {
            text: text.into(),
            thought: None,
        }
    }

    /// Creates a new inline data part.
    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    /// Returns the inline data carried by this part, if any.
    pub fn as_inline_data(&self) -> Option<&InlineData> {
        match self {
            Self::InlineData { inline_data } => Some(inline_data),
            _ => None,
        }
    }
}

impl From<InlineData> for Part {
    fn from(inline_data: InlineData) -> Self {
        Self::InlineData { inline_data }
    }
}
