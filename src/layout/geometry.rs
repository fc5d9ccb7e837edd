//! Polar and cartesian geometry for circular layout
//!
//! Angles are radians clockwise from the top of the circle. Screen
//! coordinates are y-down, so the top of a circle of radius r centered
//! at the origin is (0, -r).

use serde::{Deserialize, Serialize};

/// Polar coordinate relative to some circle center
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub radius: f64,
    /// Radians clockwise from the top
    pub theta: f64,
}

impl Polar {
    pub fn new(radius: f64, theta: f64) -> Self {
        Self { radius, theta }
    }

    /// Rotate clockwise by `delta` radians
    pub fn rotate(self, delta: f64) -> Self {
        Self::new(self.radius, self.theta + delta)
    }

    /// Move radially outward by `dr` (inward when negative)
    pub fn extend(self, dr: f64) -> Self {
        Self::new(self.radius + dr, self.theta)
    }
}

/// Screen-space point, y-down
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn translate(self, by: Point) -> Self {
        Self::new(self.x + by.x, self.y + by.y)
    }

    pub fn distance(self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

impl From<Polar> for Point {
    fn from(polar: Polar) -> Self {
        Self {
            x: polar.radius * polar.theta.sin(),
            y: -polar.radius * polar.theta.cos(),
        }
    }
}

/// Unit vector of a clockwise-from-top angle
pub fn direction(theta: f64) -> Point {
    Point::new(theta.sin(), -theta.cos())
}

/// Chord length subtended by `angle` on a circle of radius `radius`
pub fn chord(radius: f64, angle: f64) -> f64 {
    2.0 * radius * (angle / 2.0).sin()
}

/// Distance from the rim-circle center to the center of an arc of
/// radius `arc_radius` whose endpoints sit on the rim (radius
/// `rim_radius`) at angular offsets of ±`half_gap` from the arc's axis.
///
/// `inner` selects the near solution, whose arc dips inside the rim;
/// the far solution bulges from beyond the rim back toward the center.
pub fn arc_center_distance(rim_radius: f64, arc_radius: f64, half_gap: f64, inner: bool) -> f64 {
    let s = rim_radius * half_gap.sin();
    // Intersection requires arc_radius >= s; recipes guarantee it
    let root = (arc_radius * arc_radius - s * s).max(0.0).sqrt();
    let base = rim_radius * half_gap.cos();
    if inner {
        base - root
    } else {
        base + root
    }
}

/// Round to the fixed 2-decimal output precision
pub fn round2(v: f64) -> f64 {
    let r = (v * 100.0).round() / 100.0;
    // Normalize negative zero so output is byte-stable
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
