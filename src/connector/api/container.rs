use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{GenerationService, HandleChatUseCase};
use crate::connector::adapter::{GeminiClient, GeminiConfig, MockGeneration};

#[derive(Debug, Clone, Default)]
pub struct ContainerConfig {
    /// Answer with the offline generator instead of calling Gemini.
    pub mock_generation: bool,
    /// Explicit Gemini settings. When `None` they are read from the
    /// environment and `GOOGLE_API_KEY` becomes mandatory.
    pub gemini: Option<GeminiConfig>,
}

/// Process-wide services, built once at startup and shared by every request.
pub struct Container {
    generation_service: Arc<dyn GenerationService>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let generation_service: Arc<dyn GenerationService> = if config.mock_generation {
            debug!("Using mock generation service");
            Arc::new(MockGeneration::new())
        } else {
            let gemini = match config.gemini.clone() {
                Some(gemini) => gemini,
                None => GeminiConfig::from_env()?,
            };
            debug!(
                "Using Gemini at {} (text: {}, vision: {})",
                gemini.base_url, gemini.text_model, gemini.vision_model
            );
            Arc::new(GeminiClient::new(gemini))
        };

        Ok(Self {
            generation_service,
            config,
        })
    }

    /// Build a container around an already constructed generation service.
    pub fn with_generation_service(generation_service: Arc<dyn GenerationService>) -> Self {
        Self {
            generation_service,
            config: ContainerConfig::default(),
        }
    }

    pub fn chat_use_case(&self) -> HandleChatUseCase {
        HandleChatUseCase::new(self.generation_service.clone())
    }

    pub fn mock_generation(&self) -> bool {
        self.config.mock_generation
    }
}
