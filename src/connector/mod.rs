//! # Connector Layer
//!
//! External integrations implementing application interfaces:
//! - Generation (Gemini REST API, offline mock)
//! - HTTP surface (axum app serving the chat widget and `/chat`)
//! - CLI wiring (container, command router, controllers)

pub mod adapter;
pub mod api;
pub mod http;

pub use adapter::*;
pub use api::{Container, ContainerConfig};
pub use http::{http_app, ApiError, AppState};
