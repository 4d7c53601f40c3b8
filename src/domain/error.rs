use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Image decoding error: {0}")]
    ImageDecoding(String),

    #[error("Generation error: {0}")]
    Generation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn image_decoding(msg: impl Into<String>) -> Self {
        Self::ImageDecoding(msg.into())
    }

    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_image_decoding(&self) -> bool {
        matches!(self, Self::ImageDecoding(_))
    }

    pub fn is_generation_error(&self) -> bool {
        matches!(self, Self::Generation(_))
    }
}

impl From<base64::DecodeError> for DomainError {
    fn from(err: base64::DecodeError) -> Self {
        Self::ImageDecoding(err.to_string())
    }
}
