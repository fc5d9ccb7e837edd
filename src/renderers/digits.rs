//! Shape recipes for number words
//!
//! A number word renders as concentric digit rings: the band between a
//! ring's outer and inner radius carries the digit's value as radial
//! lines and a filled circle, and the core carries the sign marker.

use std::f64::consts::TAU;

use crate::layout::geometry::{Point, Polar};
use crate::layout::number::{DigitRing, NumberLayout};
use crate::layout::WORD_BASE_RADIUS;

use super::shapes::{Fragment, Primitive, Weight};

/// Render one number word into its fragment tree.
pub fn render_number(layout: &NumberLayout) -> Fragment {
    let scale = layout.radius / WORD_BASE_RADIUS;
    let mut word = Fragment::new("word number");

    for ring in &layout.rings {
        word.children.push(render_ring(ring, scale));
    }
    word.children
        .push(render_sign(layout, scale));

    word.translate(layout.center);
    word
}

fn render_ring(ring: &DigitRing, scale: f64) -> Fragment {
    let class = if ring.clockwise { "digit cw" } else { "digit ccw" };
    let mut frag = Fragment::new(class);

    let boundary_weight = if ring.fractional {
        Weight::Thick
    } else {
        Weight::Normal
    };
    frag.push(Primitive::stroked_circle(
        Point::origin(),
        ring.outer,
        boundary_weight.width(scale),
    ));

    let mid = (ring.outer + ring.inner) / 2.0;
    let half_band = (ring.outer - ring.inner) / 2.0;
    let mut position = Polar::new(mid, 0.0);

    let lines = ring.line_count();
    let step = if ring.has_circle() {
        // The filled circle takes the top slot; lines follow it
        frag.push(Primitive::filled_circle(position.into(), half_band));
        let step = TAU / (lines as f64 + 1.0);
        position = position.rotate(step);
        step
    } else if lines > 0 {
        TAU / lines as f64
    } else {
        0.0
    };

    for _ in 0..lines {
        frag.push(Primitive::Segment {
            from: position.extend(-half_band).into(),
            to: position.extend(half_band).into(),
            width: Weight::Normal.width(scale),
        });
        position = position.rotate(step);
    }

    frag
}

/// Core marker: fill for a positive whole number, a stroked core for
/// fractions, and a vertical bar for negatives.
fn render_sign(layout: &NumberLayout, scale: f64) -> Fragment {
    let mut frag = Fragment::new("sign");
    let r = layout.core_radius;

    match (layout.whole, layout.negative) {
        (true, false) => {
            frag.push(Primitive::filled_circle(Point::origin(), r));
        }
        (true, true) => {
            frag.push(Primitive::stroked_circle(
                Point::origin(),
                r,
                Weight::Thick.width(scale),
            ));
            frag.push(vertical_bar(r, Weight::Thick.width(scale)));
        }
        (false, false) => {
            frag.push(Primitive::stroked_circle(
                Point::origin(),
                r,
                Weight::Normal.width(scale),
            ));
        }
        (false, true) => {
            frag.push(Primitive::stroked_circle(
                Point::origin(),
                r,
                Weight::Normal.width(scale),
            ));
            frag.push(vertical_bar(r, Weight::Normal.width(scale)));
        }
    }
    frag
}

fn vertical_bar(r: f64, width: f64) -> Primitive {
    Primitive::Segment {
        from: Point::new(0.0, -r),
        to: Point::new(0.0, r),
        width,
    }
}
