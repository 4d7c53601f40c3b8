//! # Domain Layer
//!
//! Chat models, support categories and prompt composition.
//! This layer is independent of HTTP frameworks and model providers.

mod error;
pub mod models;
pub mod services;

pub use error::*;
pub use models::*;
pub use services::*;
