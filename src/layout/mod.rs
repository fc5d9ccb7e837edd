//! Layout engine for the circular script
//!
//! Computes nested circle geometry: word circles of symbols, a sentence
//! circle of words, angular placement and decoration attachment. All
//! angles follow one convention: radians clockwise from the top of the
//! circle, converted to screen coordinates only in [`geometry`].

pub mod geometry;
pub mod number;
pub mod sentence;
pub mod word;

// Re-export commonly used types
pub use geometry::{Point, Polar};
pub use number::NumberLayout;
pub use sentence::{SentenceLayout, WordUnit};
pub use word::{Letter, PlacedSymbol, WordLayout};

use std::f64::consts::{PI, TAU};

/// Word-circle radius floor
pub const WORD_BASE_RADIUS: f64 = 60.0;

/// Minimum rim arc length reserved per placed symbol
pub const MIN_SYMBOL_ARC: f64 = 42.0;

/// Widest rim span a single symbol may occupy
pub const LETTER_SPAN_MAX: f64 = PI / 2.0;

/// Angular step applied when two decorations would share a side
pub const MARK_SEPARATION: f64 = 0.35;

/// First symbol of a word sits at the bottom of its circle
pub const WORD_START_ANGLE: f64 = PI;

/// First word of a sentence sits at the top of the sentence circle
pub const SENTENCE_START_ANGLE: f64 = 0.0;

/// Clearance factor around each word circle within its sentence slot
pub const WORD_SLOT_FACTOR: f64 = 1.25;

/// Margin factor between the outermost ring and the canvas edge
pub const CANVAS_MARGIN: f64 = 1.1;

/// Consonant shape radius as a fraction of its rim-span chord
pub const CONSONANT_SIZE: f64 = 0.6;

/// Vowel mark radius as a fraction of its host chord
pub const VOWEL_SIZE: f64 = 0.1;

/// Word-circle radius for a given symbol count: non-decreasing, with a
/// minimum arc length guaranteed per symbol.
pub fn word_radius(symbol_count: usize) -> f64 {
    WORD_BASE_RADIUS.max(symbol_count as f64 * MIN_SYMBOL_ARC / TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_radius_monotonic() {
        let mut last = 0.0;
        for count in 0..40 {
            let r = word_radius(count);
            assert!(r >= last, "radius shrank at count {}", count);
            assert!(r >= WORD_BASE_RADIUS);
            last = r;
        }
    }

    #[test]
    fn test_word_radius_guarantees_minimum_arc() {
        for count in 1..40 {
            let r = word_radius(count);
            let arc = TAU * r / count as f64;
            assert!(arc + 1e-9 >= MIN_SYMBOL_ARC, "arc too short at count {}", count);
        }
    }
}
