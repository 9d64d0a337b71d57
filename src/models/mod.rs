//! Data structures for the Gemini AI API requests and responses.

mod model_params;
mod part;
mod request;
mod response;
mod safety;

pub use model_params::{ModelParams, DEFAULT_MODEL};
pub use part::{InlineData, Part};
pub use request::{Content, GenerationConfig, Modality, Request, Role};
pub use response::{
    BlockReason, Candidate, FinishReason, PromptFeedback, Response, SafetyProbability,
    SafetyRating, UsageMetadata,
};
pub use safety::HarmCategory;
