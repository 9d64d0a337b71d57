//! Turns a raw `generateContent` response into an image or a classified failure.

use crate::{
    error::EditError,
    image::DataUrl,
    models::{FinishReason, Response},
};

use super::Operation;

/// Interprets a response for the given operation.
///
/// Checks run in a fixed order and the first match decides the outcome:
/// a blocked prompt, then the first inline image of the first candidate, then an
/// abnormal finish reason, and finally a missing image with or without text.
pub fn interpret_response(response: &Response, operation: Operation) -> Result<DataUrl, EditError> {
    if let Some(feedback) = &response.prompt_feedback {
        if let Some(reason) = &feedback.block_reason {
            let error = EditError::Blocked {
                reason: reason.clone(),
                message: feedback.block_reason_message.clone(),
            };
            log::error!("{error} {response:?}");
            return Err(error);
        }
    }

    let candidate = response.first_candidate();

    if let Some(inline_data) = candidate
        .into_iter()
        .flat_map(|candidate| candidate.parts())
        .find_map(|part| part.as_inline_data())
    {
        log::info!(
            "Received image data ({}) for {operation}",
            inline_data.mime_type
        );
        return Ok(DataUrl::from(inline_data.clone()));
    }

    if let Some(reason) = candidate.and_then(|candidate| candidate.finish_reason.as_ref()) {
        if *reason != FinishReason::Stop {
            let error = EditError::Stopped {
                operation,
                reason: reason.clone(),
                detail: candidate.and_then(|candidate| candidate.finish_message.clone()),
            };
            log::error!("{error} {response:?}");
            return Err(error);
        }
    }

    let text = response
        .text()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty());
    log::error!("Model response did not contain an image part for {operation}. {response:?}");
    Err(EditError::NoImage { operation, text })
}
