//! Page module
//!
//! HTML rendering of the article list.

pub mod renderer;

pub use renderer::render_page;
