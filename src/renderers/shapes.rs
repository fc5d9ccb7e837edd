//! Primitive vector shapes
//!
//! The renderer's output vocabulary: full circles, circular arcs and
//! straight segments, grouped into class-tagged fragments that mirror
//! the sentence → word → symbol hierarchy. Primitives carry no stroke
//! or fill paint; presentation is applied by the caller on the root.

use crate::layout::geometry::Point;

/// Stroke weight steps, scaled by the owning circle's size
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Weight {
    Thin,
    Normal,
    Thick,
}

impl Weight {
    /// Stroke width for a word drawn at `scale` (1.0 at the base word
    /// radius)
    pub fn width(self, scale: f64) -> f64 {
        let base = match self {
            Weight::Thin => 1.0,
            Weight::Normal => 2.0,
            Weight::Thick => 4.0,
        };
        base * scale
    }
}

/// One unstyled vector primitive in absolute coordinates
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Full circle; filled uses the inherited fill, stroked suppresses
    /// it and draws the outline only
    Circle {
        center: Point,
        radius: f64,
        filled: bool,
        width: f64,
    },
    /// Circular arc in endpoint form
    Arc {
        from: Point,
        to: Point,
        radius: f64,
        large: bool,
        sweep: bool,
        width: f64,
    },
    /// Straight segment
    Segment {
        from: Point,
        to: Point,
        width: f64,
    },
}

impl Primitive {
    pub fn stroked_circle(center: Point, radius: f64, width: f64) -> Self {
        Primitive::Circle {
            center,
            radius,
            filled: false,
            width,
        }
    }

    pub fn filled_circle(center: Point, radius: f64) -> Self {
        Primitive::Circle {
            center,
            radius,
            filled: true,
            width: 0.0,
        }
    }

    fn translate(&mut self, by: Point) {
        match self {
            Primitive::Circle { center, .. } => *center = center.translate(by),
            Primitive::Arc { from, to, .. } | Primitive::Segment { from, to, .. } => {
                *from = from.translate(by);
                *to = to.translate(by);
            }
        }
    }
}

/// A class-tagged group of primitives and child groups
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Fragment {
    pub class: String,
    pub shapes: Vec<Primitive>,
    pub children: Vec<Fragment>,
}

impl Fragment {
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
            shapes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, shape: Primitive) {
        self.shapes.push(shape);
    }

    /// Shift this fragment and everything below it
    pub fn translate(&mut self, by: Point) {
        for shape in &mut self.shapes {
            shape.translate(by);
        }
        for child in &mut self.children {
            child.translate(by);
        }
    }

    /// Total primitive count across the subtree
    pub fn primitive_count(&self) -> usize {
        self.shapes.len()
            + self
                .children
                .iter()
                .map(Fragment::primitive_count)
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_recurses() {
        let mut child = Fragment::new("vowel");
        child.push(Primitive::filled_circle(Point::new(1.0, 1.0), 2.0));

        let mut parent = Fragment::new("letter");
        parent.push(Primitive::Segment {
            from: Point::origin(),
            to: Point::new(5.0, 0.0),
            width: 2.0,
        });
        parent.children.push(child);

        parent.translate(Point::new(10.0, 20.0));

        match &parent.shapes[0] {
            Primitive::Segment { from, to, .. } => {
                assert_eq!(*from, Point::new(10.0, 20.0));
                assert_eq!(*to, Point::new(15.0, 20.0));
            }
            _ => panic!("expected segment"),
        }
        match &parent.children[0].shapes[0] {
            Primitive::Circle { center, .. } => {
                assert_eq!(*center, Point::new(11.0, 21.0));
            }
            _ => panic!("expected circle"),
        }
        assert_eq!(parent.primitive_count(), 2);
    }

    #[test]
    fn test_weight_scaling() {
        assert_eq!(Weight::Normal.width(1.0), 2.0);
        assert_eq!(Weight::Thick.width(0.5), 2.0);
        assert_eq!(Weight::Thin.width(2.0), 2.0);
    }
}
