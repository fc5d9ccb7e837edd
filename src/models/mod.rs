//! Data models for the Gallifreyan transcriber
//!
//! This module contains the static alphabet table and the descriptor
//! types shared by the tokenizer, layout engine and renderers.

pub mod alphabet;
pub mod config;
pub mod elements;

// Re-export commonly used types
pub use alphabet::{lookup, SymbolDescriptor};
pub use config::{ConvertOptions, UnmappedPolicy};
pub use elements::*;
