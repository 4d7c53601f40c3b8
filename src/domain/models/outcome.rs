use super::ChatResponse;
use crate::domain::DomainError;

pub const IMAGE_FALLBACK_REPLY: &str =
    "I had trouble processing the image. Could you describe the issue in text?";

pub const GENERATION_FALLBACK_REPLY: &str =
    "I encountered an error. Please try again or rephrase your question.";

/// How a chat request ended when it did not hit an unexpected failure.
///
/// The two failure variants keep the error for logging; the customer only
/// ever sees the fixed replies above.
#[derive(Debug)]
pub enum ChatOutcome {
    Answered(String),
    ImageUnreadable(DomainError),
    GenerationFailed(DomainError),
}

impl ChatOutcome {
    pub fn reply(&self) -> &str {
        match self {
            Self::Answered(text) => text,
            Self::ImageUnreadable(_) => IMAGE_FALLBACK_REPLY,
            Self::GenerationFailed(_) => GENERATION_FALLBACK_REPLY,
        }
    }

    pub fn into_response(self) -> ChatResponse {
        match self {
            Self::Answered(text) => ChatResponse::new(text),
            Self::ImageUnreadable(_) => ChatResponse::new(IMAGE_FALLBACK_REPLY),
            Self::GenerationFailed(_) => ChatResponse::new(GENERATION_FALLBACK_REPLY),
        }
    }
}
