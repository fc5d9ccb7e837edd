//! Sentence-circle layout
//!
//! Places word circles into equal angular sectors of the sentence
//! circle, first word at the top, proceeding clockwise. Word centers
//! sit at sector midpoints at a common distance from the sentence
//! center, chosen so adjacent word circles cannot overlap.

use std::f64::consts::{PI, TAU};

use super::geometry::{Point, Polar};
use super::number::NumberLayout;
use super::word::WordLayout;
use super::{CANVAS_MARGIN, SENTENCE_START_ANGLE, WORD_SLOT_FACTOR};

/// A positioned word circle: script letters or a number
#[derive(Clone, Debug, PartialEq)]
pub enum WordUnit {
    Script(WordLayout),
    Number(NumberLayout),
}

impl WordUnit {
    pub fn radius(&self) -> f64 {
        match self {
            WordUnit::Script(w) => w.radius,
            WordUnit::Number(n) => n.radius,
        }
    }

    pub fn center(&self) -> Point {
        match self {
            WordUnit::Script(w) => w.center,
            WordUnit::Number(n) => n.center,
        }
    }

    fn set_center(&mut self, center: Point) {
        match self {
            WordUnit::Script(w) => w.center = center,
            WordUnit::Number(n) => n.center = center,
        }
    }

    fn scale_radius(&mut self, factor: f64) {
        match self {
            WordUnit::Script(w) => w.radius *= factor,
            WordUnit::Number(n) => n.rescale(factor),
        }
    }
}

/// The fully positioned sentence
#[derive(Clone, Debug, PartialEq)]
pub struct SentenceLayout {
    pub words: Vec<WordUnit>,
    /// Radius of the outer sentence ring
    pub radius: f64,
    /// Square canvas side length
    pub canvas: f64,
}

impl SentenceLayout {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Distance from sentence center to word centers, for `count` word
/// slots of radius `slot`. Adjacent slots must not overlap: the chord
/// between neighboring centers is 2·d·sin(π/count) and must reach
/// 2·slot.
fn word_center_distance(count: usize, slot: f64) -> f64 {
    match count {
        0 | 1 => 0.0,
        2 => slot,
        n => slot / (PI / n as f64).sin(),
    }
}

/// Position word circles around the sentence center.
pub fn compute_sentence(mut words: Vec<WordUnit>) -> SentenceLayout {
    let count = words.len();
    if count == 0 {
        return SentenceLayout {
            words,
            radius: 0.0,
            canvas: 0.0,
        };
    }

    let max_radius = words
        .iter()
        .map(WordUnit::radius)
        .fold(0.0_f64, f64::max);
    let slot = max_radius * WORD_SLOT_FACTOR;
    let distance = word_center_distance(count, slot);

    // Cap each word circle to its sector allowance. The slot formula
    // derives from the largest word, so the cap holds by construction;
    // the clamp keeps it an explicit invariant.
    if count >= 2 {
        let allowance = distance * (PI / count as f64).sin().min(1.0);
        for word in words.iter_mut() {
            let r = word.radius();
            if r > allowance {
                word.scale_radius(allowance / r);
            }
        }
    }

    let sector = TAU / count as f64;
    for (i, word) in words.iter_mut().enumerate() {
        let position = Polar::new(distance, SENTENCE_START_ANGLE + i as f64 * sector);
        word.set_center(position.into());
    }

    let radius = distance + slot;
    let canvas = 2.0 * radius * CANVAS_MARGIN;

    log::debug!(
        "sentence layout: {} words, ring radius {:.1}, canvas {:.1}",
        count,
        radius,
        canvas
    );

    SentenceLayout {
        words,
        radius,
        canvas,
    }
}
