// Types representing the structure of relevance expressions

mod error;
mod types;

// Re-export all public symbols
pub use error::*;
pub use types::*;
