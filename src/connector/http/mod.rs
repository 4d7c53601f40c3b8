mod app;
mod chat_handler;
mod error;
mod home_handler;
mod state;

pub use app::http_app;
pub use error::{ApiError, ErrorBody};
pub use home_handler::HOME_TEMPLATE;
pub use state::AppState;
