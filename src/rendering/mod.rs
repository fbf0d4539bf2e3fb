//! Output of fragments and highlight spans to a terminal

mod highlights;
mod renderer;
mod terminal;

pub use highlights::{describe, paint};
pub use renderer::render;
pub use terminal::Terminal;
