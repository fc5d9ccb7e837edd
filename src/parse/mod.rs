//! Parsing for the Gallifreyan transcriber
//!
//! This module turns raw input text into per-word phoneme token
//! streams via longest-match lookup against the alphabet table.

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::{tokenize, TokenizedText};
