use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::domain::{ChatRequest, ImageAttachment};

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(
        &self,
        message: String,
        option: Option<String>,
        image: Option<PathBuf>,
        description: Option<String>,
    ) -> Result<String> {
        let mut request = ChatRequest::new(message);

        if let Some(option) = option {
            request = request.with_option(option);
        }

        if let Some(path) = image {
            request = request.with_image(Self::encode_image(&path).await?);
        }

        if let Some(description) = description {
            request = request.with_image_description(description);
        }

        let use_case = self.container.chat_use_case();
        let outcome = use_case.execute(&request).await?;

        Ok(outcome.into_response().response)
    }

    async fn encode_image(path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read image {}", path.display()))?;

        let mime_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(ImageAttachment::mime_type_for_extension)
            .unwrap_or("image/jpeg");

        Ok(ImageAttachment::new(mime_type, bytes).to_data_url())
    }
}
