//! Request models for the Gemini AI API.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::Part;

/// A request to the `generateContent` endpoint.
#[derive(Debug, Clone, Serialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(doc)]
pub struct Request {
    /// The contents of the request: images and the instruction text.
    pub contents: Vec<Content>,
    /// Optional generation settings; the service defaults are used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub generation_config: Option<GenerationConfig>,
}

/// The producer of a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Content supplied by the user.
    User,
    /// Content generated by the model.
    Model,
}

/// A content object containing an ordered list of parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// Who produced this content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// The parts that make up the content.
    #[serde(default)]
    pub parts: Vec<Part>,
}

impl Content {
    /// Creates user content from the given parts, kept in order.
    pub fn user(parts: impl IntoIterator<Item = Part>) -> Self {
        Self {
            role: Some(Role::User),
            parts: parts.into_iter().collect(),
        }
    }
}

/// Output kinds the model may produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Text output.
    Text,
    /// Image output.
    Image,
}

/// Generation settings sent with a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
#[builder(doc)]
pub struct GenerationConfig {
    /// Modalities the response may contain
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    pub response_modalities: Option<Vec<Modality>>,
}

impl GenerationConfig {
    /// Asks for both image and text output, which image-editing models require.
    pub fn image_and_text() -> Self {
        Self::builder()
            .response_modalities(vec![Modality::Image, Modality::Text])
            .build()
    }
}

impl Request {
    /// Creates an image-and-text request from a single ordered list of parts.
    pub fn image_edit(parts: impl IntoIterator<Item = Part>) -> Self {
        Self::builder()
            .contents(vec![Content::user(parts)])
            .generation_config(GenerationConfig::image_and_text())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn image_edit_request_wire_format() {
        let request = Request::image_edit([
            Part::inline_data("image/jpeg", "/9j/"),
            Part::text("make it pop"),
        ]);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "contents": [{
                    "role": "user",
                    "parts": [
                        { "inlineData": { "mimeType": "image/jpeg", "data": "/9j/" } },
                        { "text": "make it pop" }
                    ]
                }],
                "generationConfig": { "responseModalities": ["IMAGE", "TEXT"] }
            })
        );
    }

    #[test]
    fn generation_config_is_omitted_when_unset() {
        let request = Request::builder()
            .contents(vec![Content::user([Part::text("hi")])])
            .build();
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("generationConfig").is_none());
    }
}
