//! JavaScript-facing WASM API
//!
//! The conversion entry points plus the narrow export adapter the page
//! glue uses to restyle and download the generated markup.
//!
//! # Module Structure
//!
//! - `core`: conversion entry points (`toGallifreyan`, `convertText`)
//! - `export`: root restyling and data-URI encoding

pub mod core;
pub mod export;

pub use self::core::{convert_text, to_gallifreyan};
pub use export::{apply_root_style, to_data_uri};
