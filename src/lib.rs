//! Circular Gallifreyan transcriber WASM module
//!
//! Converts arbitrary text into an SVG rendering of the circular script:
//! each word drawn as a circle of symbols, each symbol a consonant or
//! vowel shape with its attached decorations.

pub mod models;
pub mod parse;
pub mod layout;
pub mod renderers;
pub mod convert;
pub mod errors;
pub mod api;

// Re-export commonly used types
pub use convert::{convert, convert_with, Conversion};
pub use errors::{ConvertError, UnmappedCharacter};
pub use models::config::{ConvertOptions, UnmappedPolicy};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Gallifreyan transcriber WASM module initialized");
}
