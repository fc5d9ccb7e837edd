//! Number-word layout
//!
//! A word written in digits is drawn as concentric rings rather than a
//! circle of letters: one ring per digit, read from the outside in,
//! with the digit's value encoded by radial lines and a filled circle.

use crate::models::elements::NumberToken;

use super::geometry::Point;
use super::word_radius;

/// One digit ring between two radii
#[derive(Clone, Debug, PartialEq)]
pub struct DigitRing {
    /// 0..=9
    pub value: u8,
    /// Digit sits after the decimal point
    pub fractional: bool,
    /// Outer radius of this ring's band
    pub outer: f64,
    /// Inner radius of this ring's band
    pub inner: f64,
    /// Alternating rotation class hook for presentation
    pub clockwise: bool,
}

impl DigitRing {
    /// Radial lines drawn in the band: value mod 5
    pub fn line_count(&self) -> u8 {
        self.value % 5
    }

    /// A filled circle marks values of five and above
    pub fn has_circle(&self) -> bool {
        self.value >= 5
    }
}

/// A number word's concentric-ring geometry
#[derive(Clone, Debug, PartialEq)]
pub struct NumberLayout {
    pub rings: Vec<DigitRing>,
    pub negative: bool,
    pub whole: bool,
    /// Outer radius (the word-circle radius of this number)
    pub radius: f64,
    /// Radius left inside the innermost ring, for the sign marker
    pub core_radius: f64,
    /// Center within the sentence, filled in by the sentence layout
    pub center: Point,
}

impl NumberLayout {
    /// Shrink the whole figure to fit a smaller sector allowance
    pub fn rescale(&mut self, factor: f64) {
        self.radius *= factor;
        self.core_radius *= factor;
        for ring in &mut self.rings {
            ring.outer *= factor;
            ring.inner *= factor;
        }
    }
}

/// Lay out a number word as concentric digit rings
pub fn compute_number(number: &NumberToken) -> NumberLayout {
    let digit_count = number.digits.len();
    let radius = word_radius(digit_count);
    let step = radius / (digit_count as f64 + 1.0);

    let mut rings = Vec::with_capacity(digit_count);
    let mut outer = radius;
    let mut clockwise = false;
    for digit in &number.digits {
        let inner = outer - step;
        rings.push(DigitRing {
            value: digit.value,
            fractional: digit.fractional,
            outer,
            inner,
            clockwise,
        });
        outer = inner;
        clockwise = !clockwise;
    }

    NumberLayout {
        rings,
        negative: number.negative,
        whole: number.whole,
        radius,
        core_radius: outer,
        center: Point::origin(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::elements::DigitToken;

    fn number(digits: &[u8], negative: bool) -> NumberToken {
        NumberToken {
            negative,
            whole: true,
            digits: digits
                .iter()
                .map(|&value| DigitToken {
                    value,
                    fractional: false,
                })
                .collect(),
        }
    }

    #[test]
    fn test_rings_nest_strictly() {
        let layout = compute_number(&number(&[4, 2, 7], false));
        assert_eq!(layout.rings.len(), 3);
        assert_eq!(layout.rings[0].outer, layout.radius);
        for pair in layout.rings.windows(2) {
            assert!((pair[0].inner - pair[1].outer).abs() < 1e-9);
            assert!(pair[1].outer < pair[0].outer);
        }
        assert!(layout.core_radius > 0.0);
        assert!(layout.core_radius < layout.rings.last().unwrap().outer);
    }

    #[test]
    fn test_digit_encoding() {
        let layout = compute_number(&number(&[0, 3, 5, 8], false));
        let rings = &layout.rings;
        assert_eq!(rings[0].line_count(), 0);
        assert!(!rings[0].has_circle());
        assert_eq!(rings[1].line_count(), 3);
        assert!(!rings[1].has_circle());
        assert_eq!(rings[2].line_count(), 0);
        assert!(rings[2].has_circle());
        assert_eq!(rings[3].line_count(), 3);
        assert!(rings[3].has_circle());
    }

    #[test]
    fn test_alternating_rotation_classes() {
        let layout = compute_number(&number(&[1, 2, 3], false));
        assert!(!layout.rings[0].clockwise);
        assert!(layout.rings[1].clockwise);
        assert!(!layout.rings[2].clockwise);
    }

    #[test]
    fn test_rescale_preserves_nesting() {
        let mut layout = compute_number(&number(&[9, 9], true));
        let ratio = layout.rings[1].outer / layout.radius;
        layout.rescale(0.5);
        assert!((layout.rings[1].outer / layout.radius - ratio).abs() < 1e-9);
    }
}
