pub mod ask_controller;
pub mod serve_controller;

pub use ask_controller::AskController;
pub use serve_controller::ServeController;
