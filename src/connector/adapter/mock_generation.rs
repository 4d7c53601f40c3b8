use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use async_trait::async_trait;
use tracing::debug;

use crate::application::GenerationService;
use crate::domain::{DomainError, ImageAttachment};

const CANNED_REPLIES: [&str; 4] = [
    "Thanks for reaching out! How can I help you today?",
    "I'm sorry to hear that. Could you share a few more details so I can look into it?",
    "Happy to help with that. Let me walk you through the next steps.",
    "Got it. Is there anything else you'd like me to check for you?",
];

/// Offline [`GenerationService`] for local runs and tests.
///
/// Picks a canned reply from a hash of the prompt, so the same prompt always
/// yields the same reply.
pub struct MockGeneration;

impl MockGeneration {
    pub fn new() -> Self {
        Self
    }

    fn pick(prompt: &str) -> &'static str {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        CANNED_REPLIES[(hasher.finish() % CANNED_REPLIES.len() as u64) as usize]
    }
}

impl Default for MockGeneration {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationService for MockGeneration {
    async fn generate_text(&self, prompt: &str) -> Result<String, DomainError> {
        debug!("Generated mock reply for {}-char prompt", prompt.len());
        Ok(Self::pick(prompt).to_string())
    }

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String, DomainError> {
        Ok(format!(
            "Issue Identification: received a {} image ({} bytes).\n\
             Detailed Analysis: {}\n\
             Recommended Solutions: share more details if the issue persists.",
            image.mime_type(),
            image.byte_len(),
            Self::pick(prompt)
        ))
    }

    fn name(&self) -> &str {
        "mock-generation"
    }
}
