mod gemini_client;
mod mock_generation;

pub use gemini_client::*;
pub use mock_generation::*;
