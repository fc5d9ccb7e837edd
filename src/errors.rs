//! Error and warning types for the conversion pipeline
//!
//! Fatal errors abort the whole conversion; unmapped characters are
//! recoverable and surface as warnings alongside the finished markup.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whole-input conversion failures
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// Non-empty input produced zero drawable tokens (strict mode only)
    #[error("input contains no convertible letters")]
    InvalidInput,

    /// Input exceeds the configured size cap
    #[error("input of {len} characters exceeds the {max} character limit")]
    InputTooLarge { len: usize, max: usize },
}

/// A character the alphabet table could not map.
///
/// Recorded under `UnmappedPolicy::Report`; never fatal on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappedCharacter {
    /// The offending character
    pub ch: char,
    /// Zero-based index of the word it appeared in
    pub word: usize,
    /// Zero-based character offset within that word
    pub offset: usize,
}

impl std::fmt::Display for UnmappedCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unsupported character {:?} in word {} at offset {}",
            self.ch, self.word, self.offset
        )
    }
}
