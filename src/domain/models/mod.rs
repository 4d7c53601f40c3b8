mod category;
mod chat;
mod image;
mod outcome;

pub use category::*;
pub use chat::*;
pub use image::*;
pub use outcome::*;
