mod builder;
mod constants;
mod parser;
pub mod try_into_js_value;

pub use builder::BuilderNamespace;
pub use parser::ParserNamespace;

// Re-export constants functions
pub use constants::*;
