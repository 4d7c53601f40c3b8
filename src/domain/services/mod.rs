mod prompt_composer;

pub use prompt_composer::*;
