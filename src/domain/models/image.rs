use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::domain::DomainError;

const DEFAULT_MIME_TYPE: &str = "image/jpeg";

/// A decoded image attached to a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    mime_type: String,
    bytes: Vec<u8>,
}

impl ImageAttachment {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Decode a data-URL style payload (`<metadata>,<base64-body>`).
    ///
    /// Only the first comma separates metadata from the body. The mime type
    /// comes from metadata such as `data:image/png;base64`. ASCII whitespace in
    /// the body (line-wrapped base64) is ignored.
    pub fn from_data_url(payload: &str) -> Result<Self, DomainError> {
        let (metadata, body) = payload
            .split_once(',')
            .ok_or_else(|| DomainError::image_decoding("missing ',' separator in image payload"))?;

        let body: String = body.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = BASE64.decode(body)?;
        if bytes.is_empty() {
            return Err(DomainError::image_decoding("image payload is empty"));
        }

        Ok(Self::new(parse_mime_type(metadata), bytes))
    }

    /// Encode as a data URL, the shape the chat widget sends.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.bytes))
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Mime type for an image file, by extension.
    pub fn mime_type_for_extension(ext: &str) -> &'static str {
        match ext.to_lowercase().as_str() {
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "heic" => "image/heic",
            _ => DEFAULT_MIME_TYPE,
        }
    }
}

fn parse_mime_type(metadata: &str) -> String {
    let metadata = metadata.trim();
    let metadata = metadata.strip_prefix("data:").unwrap_or(metadata);
    let mime = metadata.split(';').next().unwrap_or_default().trim();

    if mime.is_empty() {
        DEFAULT_MIME_TYPE.to_string()
    } else {
        mime.to_string()
    }
}
