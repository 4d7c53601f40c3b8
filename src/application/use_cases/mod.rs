mod handle_chat;

pub use handle_chat::*;
