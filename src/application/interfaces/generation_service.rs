use async_trait::async_trait;

use crate::domain::{DomainError, ImageAttachment};

/// Turns prompts into generated text.
///
/// Implementors encapsulate transport and vendor-specific API details. Remote
/// failures (network, quota, malformed replies) are reported as
/// [`DomainError::Generation`]; anything else is treated by callers as an
/// unexpected failure.
#[async_trait]
pub trait GenerationService: Send + Sync {
    async fn generate_text(&self, prompt: &str) -> Result<String, DomainError>;

    async fn generate_with_image(
        &self,
        prompt: &str,
        image: &ImageAttachment,
    ) -> Result<String, DomainError>;

    /// Short identifier for logs.
    fn name(&self) -> &str;
}
