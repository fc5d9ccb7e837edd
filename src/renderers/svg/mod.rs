//! SVG output
//!
//! Serializes the positioned sentence into a self-contained SVG
//! document: nested groups mirroring the sentence → word → symbol
//! hierarchy, written with `quick_xml` so the markup is well-formed by
//! construction.

pub mod document;
pub mod elements;

pub use document::{render_svg, ROOT_ID, SENTENCE_ID};
