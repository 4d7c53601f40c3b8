use std::path::PathBuf;
use std::sync::Arc;

use crate::application::HandleChatUseCase;

#[derive(Clone)]
pub struct AppState {
    pub(crate) chat: Arc<HandleChatUseCase>,
    pub(crate) templates_dir: PathBuf,
}

impl AppState {
    pub fn new(chat: HandleChatUseCase, templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            chat: Arc::new(chat),
            templates_dir: templates_dir.into(),
        }
    }
}
