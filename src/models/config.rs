//! Conversion options
//!
//! Caller-facing configuration for one conversion call. Deserializable
//! from the JavaScript options object at the WASM boundary.

use serde::{Deserialize, Serialize};

/// What to do with characters the alphabet table cannot map
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UnmappedPolicy {
    /// Drop the character silently
    Skip,
    /// Drop the character and record a warning
    Report,
}

/// Configuration for one conversion
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConvertOptions {
    /// Fail with `ConvertError::InvalidInput` when non-empty input
    /// yields zero tokens
    pub strict: bool,

    /// Policy for characters outside the alphabet
    pub unmapped: UnmappedPolicy,

    /// Input-size cap, in characters
    pub max_chars: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            strict: false,
            unmapped: UnmappedPolicy::Report,
            max_chars: 10_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConvertOptions::default();
        assert!(!options.strict);
        assert_eq!(options.unmapped, UnmappedPolicy::Report);
        assert_eq!(options.max_chars, 10_000);
    }

    #[test]
    fn test_partial_deserialization() {
        // Callers may pass any subset of fields
        let options: ConvertOptions = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(options.strict);
        assert_eq!(options.unmapped, UnmappedPolicy::Report);

        let options: ConvertOptions = serde_json::from_str(r#"{"unmapped": "skip"}"#).unwrap();
        assert_eq!(options.unmapped, UnmappedPolicy::Skip);
    }
}
