//! Response models for the Gemini AI API.

use std::fmt;

use serde::Deserialize;

use super::{Content, HarmCategory, Part};

/// A response from the `generateContent` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// The generated candidates from the model.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Feedback on the prompt, present when the prompt itself was rejected.
    pub prompt_feedback: Option<PromptFeedback>,
    /// Metadata about token usage.
    pub usage_metadata: Option<UsageMetadata>,
    /// The version of the model used.
    pub model_version: Option<String>,
}

impl Response {
    /// Returns the first candidate, the only one image models produce.
    pub fn first_candidate(&self) -> Option<&Candidate> {
        self.candidates.first()
    }

    /// Concatenates the non-thought text parts of the first candidate.
    ///
    /// Returns `None` when the first candidate has no text at all.
    pub fn text(&self) -> Option<String> {
        let mut texts = self
            .first_candidate()?
            .parts()
            .iter()
            .filter_map(|part| match part {
                Part::Text { text, thought } if !thought.unwrap_or(false) => Some(text.as_str()),
                _ => None,
            })
            .peekable();

        texts.peek()?;
        Some(texts.collect())
    }
}

/// Feedback about the prompt.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was blocked before any generation happened.
    pub block_reason: Option<BlockReason>,
    /// Human-readable explanation of the block.
    pub block_reason_message: Option<String>,
    /// Safety ratings of the prompt.
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

/// Why a prompt was blocked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlockReason {
    /// Default value. This value is unused.
    #[serde(rename = "BLOCK_REASON_UNSPECIFIED")]
    Unspecified,
    /// Prompt was blocked due to safety reasons.
    Safety,
    /// Prompt was blocked due to unknown reasons.
    Other,
    /// Prompt contains terms from the terminology blocklist.
    Blocklist,
    /// Prompt was blocked due to prohibited content.
    ProhibitedContent,
    /// Candidates blocked due to unsafe image generation content.
    ImageSafety,
    /// A reason this client does not know about yet.
    #[serde(untagged)]
    Unrecognized(String),
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unspecified => write!(f, "BLOCK_REASON_UNSPECIFIED"),
            Self::Safety => write!(f, "SAFETY"),
            Self::Other => write!(f, "OTHER"),
            Self::Blocklist => write!(f, "BLOCKLIST"),
            Self::ProhibitedContent => write!(f, "PROHIBITED_CONTENT"),
            Self::ImageSafety => write!(f, "IMAGE_SAFETY"),
            Self::Unrecognized(reason) => f.write_str(reason),
        }
    }
}

/// A candidate response from the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The content of the candidate response.
    pub content: Option<Content>,
    /// The reason why the generation finished.
    pub finish_reason: Option<FinishReason>,
    /// Free-text detail accompanying the finish reason.
    pub finish_message: Option<String>,
    /// Safety ratings for different harm categories.
    #[serde(default)]
    pub safety_ratings: Vec<SafetyRating>,
}

impl Candidate {
    /// The candidate's parts, empty when the candidate carries no content.
    pub fn parts(&self) -> &[Part] {
        self.content
            .as_ref()
            .map(|content| content.parts.as_slice())
            .unwrap_or_default()
    }
}

/// Safety rating for a specific harm category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyRating {
    /// The category of harm being rated.
    pub category: Option<HarmCategory>,
    /// The probability level of harmful content. Omitted on some blocked ratings.
    pub probability: Option<SafetyProbability>,
    /// Whether this rating caused the content to be blocked.
    #[serde(default)]
    pub blocked: bool,
}

/// Probability level for safety ratings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SafetyProbability {
    /// Default value. This value is unused.
    #[serde(rename = "HARM_PROBABILITY_UNSPECIFIED")]
    Unspecified,
    /// Negligible probability of harmful content.
    Negligible,
    /// Low probability of harmful content.
    Low,
    /// Medium probability of harmful content.
    Medium,
    /// High probability of harmful content.
    High,
    /// A level this client does not know about yet.
    #[serde(untagged)]
    Unrecognized(String),
}

/// Reason why the generation finished.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FinishReason {
    /// Default value. This value is unused.
    #[serde(rename = "FINISH_REASON_UNSPECIFIED")]
    Unspecified,
    /// Natural stop point of the model or provided stop sequence.
    Stop,
    /// The maximum number of tokens as specified in the request was reached.
    MaxTokens,
    /// The response candidate content was flagged for safety reasons.
    Safety,
    /// The response candidate content was flagged for recitation reasons.
    Recitation,
    /// The response candidate content was flagged for using an unsupported language.
    Language,
    /// Unknown reason.
    Other,
    /// Token generation stopped because the content contains forbidden terms.
    Blocklist,
    /// Token generation stopped for potentially containing prohibited content.
    ProhibitedContent,
    /// Token generation stopped because the content potentially contains Sensitive Personally Identifiable Information (SPII).
    Spii,
    /// The function call generated by the model is invalid.
    MalformedFunctionCall,
    /// Token generation stopped because generated images contain safety violations.
    ImageSafety,
    /// Image generation stopped because generated images have other prohibited content.
    ImageProhibitedContent,
    /// Image generation stopped because of other miscellaneous issues.
    ImageOther,
    /// The model was expected to generate an image, but none was generated.
    NoImage,
    /// Image generation stopped due to recitation.
    ImageRecitation,
    /// A reason this client does not know about yet.
    #[serde(untagged)]
    Unrecognized(String),
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unspecified => "FINISH_REASON_UNSPECIFIED",
            Self::Stop => "STOP",
            Self::MaxTokens => "MAX_TOKENS",
            Self::Safety => "SAFETY",
            Self::Recitation => "RECITATION",
            Self::Language => "LANGUAGE",
            Self::Other => "OTHER",
            Self::Blocklist => "BLOCKLIST",
            Self::ProhibitedContent => "PROHIBITED_CONTENT",
            Self::Spii => "SPII",
            Self::MalformedFunctionCall => "MALFORMED_FUNCTION_CALL",
            Self::ImageSafety => "IMAGE_SAFETY",
            Self::ImageProhibitedContent => "IMAGE_PROHIBITED_CONTENT",
            Self::ImageOther => "IMAGE_OTHER",
            Self::NoImage => "NO_IMAGE",
            Self::ImageRecitation => "IMAGE_RECITATION",
            Self::Unrecognized(reason) => reason,
        };
        f.write_str(name)
    }
}

/// Metadata about token usage in the request and response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Number of tokens in the prompt.
    #[serde(default)]
    pub prompt_token_count: i32,
    /// Number of tokens in the generated candidates.
    pub candidates_token_count: Option<i32>,
    /// Total number of tokens used.
    #[serde(default)]
    pub total_token_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_image_model_response() {
        let response: Response = serde_json::from_value(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "Here you go" },
                        { "inlineData": { "mimeType": "image/png", "data": "AAAA" } }
                    ]
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": { "promptTokenCount": 1290, "totalTokenCount": 2580 },
            "modelVersion": "gemini-2.5-flash-image-preview"
        }))
        .unwrap();

        let candidate = response.first_candidate().unwrap();
        assert_eq!(candidate.finish_reason, Some(FinishReason::Stop));
        assert_eq!(candidate.parts().len(), 2);
        assert_eq!(response.text().as_deref(), Some("Here you go"));
    }

    #[test]
    fn unknown_reasons_keep_their_code() {
        let feedback: PromptFeedback =
            serde_json::from_value(json!({ "blockReason": "SOMETHING_NEW" })).unwrap();
        let reason = feedback.block_reason.unwrap();
        assert_eq!(reason, BlockReason::Unrecognized("SOMETHING_NEW".into()));
        assert_eq!(reason.to_string(), "SOMETHING_NEW");

        let finish: FinishReason = serde_json::from_value(json!("IMAGE_SAFETY")).unwrap();
        assert_eq!(finish, FinishReason::ImageSafety);
        assert_eq!(finish.to_string(), "IMAGE_SAFETY");
    }

    #[test]
    fn safety_ratings_tolerate_missing_and_unknown_values() {
        let response: Response = serde_json::from_value(json!({
            "promptFeedback": {
                "blockReason": "SAFETY",
                "safetyRatings": [{ "category": "HARM_CATEGORY_SEXUALLY_EXPLICIT", "blocked": true }]
            },
            "candidates": [{
                "finishReason": "IMAGE_SAFETY",
                "safetyRatings": [{
                    "category": "HARM_CATEGORY_NEW_KIND",
                    "probability": "HARM_PROBABILITY_NEW"
                }]
            }]
        }))
        .unwrap();

        let feedback = response.prompt_feedback.as_ref().unwrap();
        assert!(feedback.safety_ratings[0].blocked);
        assert_eq!(feedback.safety_ratings[0].probability, None);
        let rating = &response.first_candidate().unwrap().safety_ratings[0];
        assert_eq!(
            rating.probability,
            Some(SafetyProbability::Unrecognized("HARM_PROBABILITY_NEW".into()))
        );
        assert_eq!(
            rating.category,
            Some(HarmCategory::Unrecognized("HARM_CATEGORY_NEW_KIND".into()))
        );
    }

    #[test]
    fn text_skips_thoughts_and_missing_content() {
        let response: Response = serde_json::from_value(json!({
            "candidates": [{
                "content": { "parts": [
                    { "text": "thinking...", "thought": true },
                    { "text": "I can't " },
                    { "text": "do that." }
                ] }
            }]
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("I can't do that."));

        let empty: Response =
            serde_json::from_value(json!({ "candidates": [{ "finishReason": "SAFETY" }] }))
                .unwrap();
        assert_eq!(empty.text(), None);
        assert!(Response::default().text().is_none());
    }
}
