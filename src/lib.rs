pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{GenerationService, HandleChatUseCase};

pub use cli::Commands;

pub use connector::{
    http_app, ApiError, AppState, Container, ContainerConfig, GeminiClient, GeminiConfig,
    MockGeneration,
};

pub use domain::{
    ChatOutcome, ChatRequest, ChatResponse, DomainError, ImageAttachment, PromptComposer,
    SupportCategory, GENERATION_FALLBACK_REPLY, IMAGE_FALLBACK_REPLY,
};
