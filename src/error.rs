//! Error types for the photo editing client.

use thiserror::Error;

use crate::{
    editor::Operation,
    models::{BlockReason, FinishReason},
};

/// Errors raised while talking to the Gemini AI API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Base error for the Gemini AI client.
    #[error("[GoogleGenerativeAI Error]: {message}")]
    Base {
        /// Error message
        message: String,
    },

    /// Error occurred during an API request.
    #[error("API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error occurred when parsing JSON.
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl ApiError {
    /// Creates a new Base error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self::Base {
            message: message.into(),
        }
    }
}

/// Errors raised while turning a local image into an inline data part.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The image content could not be read.
    #[error("Failed to read image: {0}")]
    Read(#[from] std::io::Error),
    /// No usable MIME type could be determined for the image.
    #[error("Could not determine MIME type: {0}")]
    MimeType(String),
    /// A data URL did not have a `data:<type>;base64,<data>` shape.
    #[error("Invalid data URL: {0}")]
    InvalidDataUrl(String),
}

/// Why an image edit did not produce an image.
#[derive(Debug, Error)]
pub enum EditError {
    /// A source image could not be encoded; no request was sent.
    #[error(transparent)]
    Encoding(#[from] EncodingError),

    /// The prompt was rejected before any generation happened.
    #[error("The request was blocked. Reason: {reason}. {}", .message.as_deref().unwrap_or_default())]
    Blocked {
        /// Block reason code reported by the API
        reason: BlockReason,
        /// Accompanying explanation, if any
        message: Option<String>,
    },

    /// Generation started but stopped without producing an image.
    #[error(
        "Image generation for {operation} stopped unexpectedly. Reason: {reason}. \
         This is often related to safety settings.{}",
        stop_detail(.detail.as_deref())
    )]
    Stopped {
        /// Operation that issued the request
        operation: Operation,
        /// Finish reason reported by the API
        reason: FinishReason,
        /// Finish message reported alongside the reason
        detail: Option<String>,
    },

    /// Generation finished normally without an image part.
    #[error("The AI model did not return an image for {operation}. {}", no_image_detail(.text.as_deref()))]
    NoImage {
        /// Operation that issued the request
        operation: Operation,
        /// Text the model answered with instead of an image
        text: Option<String>,
    },

    /// The request never produced a usable response.
    #[error(transparent)]
    Api(#[from] ApiError),
}

fn stop_detail(detail: Option<&str>) -> String {
    detail.map(|detail| format!(" {detail}")).unwrap_or_default()
}

fn no_image_detail(text: Option<&str>) -> String {
    match text {
        Some(text) => format!("The model responded with text: \"{text}\""),
        None => "This can happen because of safety filters or when the request is too complex. \
                 Please try rephrasing your instruction to be more direct."
            .to_string(),
    }
}
