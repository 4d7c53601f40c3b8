use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::GenerationService;
use crate::domain::{ChatOutcome, ChatRequest, DomainError, ImageAttachment, PromptComposer};

pub struct HandleChatUseCase {
    generation_service: Arc<dyn GenerationService>,
}

impl HandleChatUseCase {
    pub fn new(generation_service: Arc<dyn GenerationService>) -> Self {
        Self { generation_service }
    }

    /// Run one chat request through prompt composition and generation.
    ///
    /// Unreadable images and remote generation failures come back as
    /// [`ChatOutcome`] variants. Any other error is returned as `Err`.
    pub async fn execute(&self, request: &ChatRequest) -> Result<ChatOutcome, DomainError> {
        let category = request.category();
        let context = category.preamble();

        let generated = match request.image_payload() {
            Some(payload) => {
                let image = match ImageAttachment::from_data_url(payload) {
                    Ok(image) => image,
                    Err(e) => {
                        warn!(error = %e, "Image processing failed");
                        return Ok(ChatOutcome::ImageUnreadable(e));
                    }
                };

                debug!(
                    category = %category,
                    mime_type = image.mime_type(),
                    bytes = image.byte_len(),
                    "Routing chat to image generation"
                );

                let prompt = PromptComposer::compose_image_prompt(
                    context,
                    request.message(),
                    request.image_description(),
                );
                self.generation_service
                    .generate_with_image(&prompt, &image)
                    .await
            }
            None => {
                debug!(category = %category, "Routing chat to text generation");

                let prompt = PromptComposer::compose_text_prompt(context, request.message());
                self.generation_service.generate_text(&prompt).await
            }
        };

        match generated {
            Ok(text) if text.trim().is_empty() => {
                let e = DomainError::generation("generation service returned an empty reply");
                warn!(service = self.generation_service.name(), error = %e, "AI error");
                Ok(ChatOutcome::GenerationFailed(e))
            }
            Ok(text) => {
                info!(
                    service = self.generation_service.name(),
                    category = %category,
                    chars = text.len(),
                    "Generated chat reply"
                );
                Ok(ChatOutcome::Answered(text))
            }
            Err(e) if e.is_generation_error() => {
                warn!(service = self.generation_service.name(), error = %e, "AI error");
                Ok(ChatOutcome::GenerationFailed(e))
            }
            Err(e) => Err(e),
        }
    }
}
