//! Renderers for the Gallifreyan transcriber
//!
//! This module turns positioned layout into primitive vector shapes
//! and assembles them into the final SVG document.

pub mod digits;
pub mod glyph;
pub mod shapes;
pub mod svg;

// Re-export commonly used types
pub use shapes::{Fragment, Primitive, Weight};
pub use svg::render_svg;
