//! Shape recipes for placed symbols
//!
//! Converts one positioned symbol into its fixed recipe of primitives:
//! the four consonant bases, their dot and stroke ornaments, and the
//! vowel marks, all in word-local coordinates. [`render_word`] stitches
//! the symbols together with the rim connector arcs and shifts the
//! whole group to the word's position in the sentence.

use std::f64::consts::PI;

use crate::layout::geometry::{arc_center_distance, chord, direction, Point, Polar};
use crate::layout::word::{AttachedVowel, Letter, PlacedSymbol, WordLayout};
use crate::layout::{CONSONANT_SIZE, VOWEL_SIZE, WORD_BASE_RADIUS};
use crate::models::elements::{ConsonantBase, MarkKind, MarkSide, Ornament, VowelMark};

use super::shapes::{Fragment, Primitive, Weight};

/// Angular spacing between fanned ornament marks
const FAN_STEP: f64 = 0.5;

/// Half-angle of the crescent mark's opening
const CRESCENT_GAP: f64 = 0.9;

/// Ornament stroke length as a fraction of the host shape radius
const STROKE_REACH: f64 = 0.55;

/// Host shape center and size, for ornament and vowel anchoring
struct BaseGeometry {
    anchor: Polar,
    shape_radius: f64,
}

/// Render one word circle: symbols plus the connector arcs of the rim.
pub fn render_word(layout: &WordLayout) -> Fragment {
    let rim = layout.radius;
    let scale = rim / WORD_BASE_RADIUS;
    let mut word = Fragment::new("word script");

    for symbol in &layout.symbols {
        word.children.push(render_symbol(symbol, rim, scale));
    }

    let count = layout.symbols.len();
    let width = Weight::Normal.width(scale);
    for i in 0..count {
        let here = &layout.symbols[i];
        let end = if i + 1 == count {
            let first = &layout.symbols[0];
            first.angle + std::f64::consts::TAU - first.span_half
        } else {
            let next = &layout.symbols[i + 1];
            next.angle - next.span_half
        };
        word.push(rim_arc(rim, here.angle + here.span_half, end, width));
    }

    word.translate(layout.center);
    word
}

/// Arc along the word rim from one angle to another, clockwise
fn rim_arc(rim: f64, from: f64, to: f64, width: f64) -> Primitive {
    Primitive::Arc {
        from: Polar::new(rim, from).into(),
        to: Polar::new(rim, to).into(),
        radius: rim,
        large: to - from > PI,
        sweep: true,
        width,
    }
}

fn render_symbol(symbol: &PlacedSymbol, rim: f64, scale: f64) -> Fragment {
    match &symbol.letter {
        Letter::Vowel(vowel) => render_standalone_vowel(symbol, vowel, rim, scale),
        Letter::Consonant {
            base,
            ornament,
            vowel,
            ..
        } => render_consonant(symbol, *base, *ornament, *vowel, rim, scale),
    }
}

/// A standalone vowel keeps its rim span intact and carries a mark
/// double the size of an attached one.
fn render_standalone_vowel(
    symbol: &PlacedSymbol,
    vowel: &AttachedVowel,
    rim: f64,
    scale: f64,
) -> Fragment {
    let theta = symbol.angle;
    let span = symbol.span_half;
    let mut frag = Fragment::new("letter vowel");
    frag.push(rim_arc(rim, theta - span, theta + span, Weight::Normal.width(scale)));

    let size = 2.0 * VOWEL_SIZE * chord(rim, 2.0 * span);
    let center_radius = match vowel.mark.side {
        MarkSide::Outside => rim + 1.5 * size,
        MarkSide::OnLine => rim,
        MarkSide::Inside => rim - 1.5 * size,
    };
    frag.children.push(render_mark(
        Polar::new(center_radius, theta + vowel.mark.angular_offset),
        size,
        &vowel.mark,
        scale,
    ));
    frag
}

fn render_consonant(
    symbol: &PlacedSymbol,
    base: ConsonantBase,
    ornament: Option<Ornament>,
    vowel: Option<AttachedVowel>,
    rim: f64,
    scale: f64,
) -> Fragment {
    let theta = symbol.angle;
    let span = symbol.span_half;
    let width = Weight::Normal.width(scale);
    let mut frag = Fragment::new("letter consonant");

    let geometry = match base {
        ConsonantBase::DeepArc => {
            // The rim is interrupted over the middle half of the span;
            // the letter arc bridges the gap from inside.
            let gap = span / 2.0;
            let radius = CONSONANT_SIZE * chord(rim, 2.0 * gap);
            frag.push(rim_arc(rim, theta - span, theta - gap, width));
            frag.push(rim_arc(rim, theta + gap, theta + span, width));
            frag.push(Primitive::Arc {
                from: Polar::new(rim, theta - gap).into(),
                to: Polar::new(rim, theta + gap).into(),
                radius,
                large: true,
                sweep: true,
                width,
            });
            frag.push(Primitive::filled_circle(
                Polar::new(rim, theta - gap).into(),
                scale,
            ));
            frag.push(Primitive::filled_circle(
                Polar::new(rim, theta + gap).into(),
                scale,
            ));
            let center = arc_center_distance(rim, radius, gap, true);
            BaseGeometry {
                anchor: Polar::new(center, theta),
                shape_radius: radius,
            }
        }
        ConsonantBase::ShallowArc => {
            let radius = CONSONANT_SIZE * chord(rim, 2.0 * span);
            frag.push(Primitive::Arc {
                from: Polar::new(rim, theta - span).into(),
                to: Polar::new(rim, theta + span).into(),
                radius,
                large: false,
                sweep: true,
                width,
            });
            frag.push(Primitive::filled_circle(
                Polar::new(rim, theta - span).into(),
                scale,
            ));
            frag.push(Primitive::filled_circle(
                Polar::new(rim, theta + span).into(),
                scale,
            ));
            let center = arc_center_distance(rim, radius, span, false);
            BaseGeometry {
                anchor: Polar::new(center, theta),
                shape_radius: radius,
            }
        }
        ConsonantBase::InnerCircle => {
            let radius = 0.5 * CONSONANT_SIZE * chord(rim, 2.0 * span);
            let center = Polar::new(rim - 1.1 * radius, theta);
            frag.push(rim_arc(rim, theta - span, theta + span, width));
            frag.push(Primitive::stroked_circle(center.into(), radius, width));
            BaseGeometry {
                anchor: center,
                shape_radius: radius,
            }
        }
        ConsonantBase::RimCircle => {
            let radius = 0.5 * CONSONANT_SIZE * chord(rim, 2.0 * span);
            let center = Polar::new(rim, theta);
            frag.push(rim_arc(rim, theta - span, theta + span, width));
            frag.push(Primitive::stroked_circle(center.into(), radius, width));
            BaseGeometry {
                anchor: center,
                shape_radius: radius,
            }
        }
    };

    if let Some(ornament) = ornament {
        render_ornament(&mut frag, &geometry, ornament, theta, scale);
    }

    if let Some(vowel) = vowel {
        let size = VOWEL_SIZE * chord(rim, 2.0 * span);
        let mark_theta = theta + vowel.mark.angular_offset;
        let center_radius = match vowel.mark.side {
            MarkSide::Outside => rim + 1.5 * size,
            MarkSide::OnLine => rim,
            MarkSide::Inside => match base {
                ConsonantBase::DeepArc | ConsonantBase::InnerCircle => geometry.anchor.radius,
                ConsonantBase::RimCircle => rim - 0.45 * geometry.shape_radius,
                ConsonantBase::ShallowArc => rim - 2.0 * size,
            },
        };
        frag.children.push(render_mark(
            Polar::new(center_radius, mark_theta),
            size,
            &vowel.mark,
            scale,
        ));
    }

    frag
}

/// Fan the ornament marks around the direction from the host shape
/// toward the word center.
fn render_ornament(
    frag: &mut Fragment,
    geometry: &BaseGeometry,
    ornament: Ornament,
    theta: f64,
    scale: f64,
) {
    let anchor: Point = geometry.anchor.into();
    let inward = theta + PI;
    let count = ornament.count();
    let first = -(count as f64 - 1.0) / 2.0;

    for k in 0..count {
        let dir = direction(inward + (first + k as f64) * FAN_STEP);
        match ornament {
            Ornament::Dots(_) => {
                let distance = 0.55 * geometry.shape_radius;
                frag.push(Primitive::filled_circle(
                    Point::new(anchor.x + distance * dir.x, anchor.y + distance * dir.y),
                    0.12 * geometry.shape_radius,
                ));
            }
            Ornament::Strokes(_) => {
                let from = Point::new(
                    anchor.x + geometry.shape_radius * dir.x,
                    anchor.y + geometry.shape_radius * dir.y,
                );
                let reach = (1.0 + STROKE_REACH) * geometry.shape_radius;
                let to = Point::new(anchor.x + reach * dir.x, anchor.y + reach * dir.y);
                frag.push(Primitive::Segment {
                    from,
                    to,
                    width: Weight::Thick.width(scale),
                });
            }
        }
    }
}

/// One vowel mark at an absolute polar position (word-local)
fn render_mark(center: Polar, size: f64, mark: &VowelMark, scale: f64) -> Fragment {
    let mut frag = Fragment::new("vowel");
    let point: Point = center.into();
    let width = Weight::Normal.width(scale);

    match mark.kind {
        MarkKind::Dot => {
            frag.push(Primitive::stroked_circle(point, size, width));
        }
        MarkKind::DotPair => {
            frag.push(Primitive::stroked_circle(point, size, width));
            frag.push(Primitive::stroked_circle(
                point,
                size / 2.0,
                Weight::Thin.width(scale),
            ));
        }
        MarkKind::Line => {
            frag.push(Primitive::stroked_circle(point, size, width));
            frag.push(Primitive::Segment {
                from: center.extend(-size).into(),
                to: Point::origin(),
                width,
            });
        }
        MarkKind::Crescent => {
            let from = offset_on_circle(point, size, center.theta - CRESCENT_GAP);
            let to = offset_on_circle(point, size, center.theta + CRESCENT_GAP);
            frag.push(Primitive::Arc {
                from,
                to,
                radius: size,
                large: true,
                sweep: false,
                width,
            });
        }
    }
    frag
}

/// Point on a circle of radius `r` around `center`, in the direction of
/// the given word-angle
fn offset_on_circle(center: Point, r: f64, theta: f64) -> Point {
    let dir = direction(theta);
    Point::new(center.x + r * dir.x, center.y + r * dir.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::word::{compute_word, group_letters};
    use crate::models::config::ConvertOptions;
    use crate::models::elements::WordTokens;
    use crate::parse::tokenize;

    fn word_fragment(text: &str) -> Fragment {
        let tokenized = tokenize(text, &ConvertOptions::default()).unwrap();
        let layout = match &tokenized.words[0] {
            WordTokens::Letters(tokens) => compute_word(group_letters(tokens)),
            WordTokens::Number(_) => panic!("expected letters"),
        };
        render_word(&layout)
    }

    #[test]
    fn test_symbol_groups_match_placed_count() {
        // hello: h, l, l placed, vowels attached
        let word = word_fragment("hello");
        assert_eq!(word.children.len(), 3);
        for child in &word.children {
            assert_eq!(child.class, "letter consonant");
        }
        // Connector arcs at the word level, one per symbol
        let connectors = word
            .shapes
            .iter()
            .filter(|s| matches!(s, Primitive::Arc { .. }))
            .count();
        assert_eq!(connectors, 3);
    }

    #[test]
    fn test_attached_vowels_nest_inside_their_consonants() {
        let word = word_fragment("hello");
        let vowel_groups: Vec<usize> = word
            .children
            .iter()
            .map(|c| c.children.iter().filter(|g| g.class == "vowel").count())
            .collect();
        // e on h, nothing on first l, o on second l
        assert_eq!(vowel_groups, vec![1, 0, 1]);
    }

    #[test]
    fn test_standalone_vowel_is_its_own_symbol() {
        let word = word_fragment("a");
        assert_eq!(word.children.len(), 1);
        assert_eq!(word.children[0].class, "letter vowel");
        assert_eq!(word.children[0].children[0].class, "vowel");
    }

    #[test]
    fn test_ornament_counts() {
        // d carries three dots
        let word = word_fragment("d");
        let dots = word.children[0]
            .shapes
            .iter()
            .filter(|s| matches!(s, Primitive::Circle { filled: true, radius, .. } if *radius > 1.5))
            .count();
        assert_eq!(dots, 3);

        // f carries three strokes
        let word = word_fragment("f");
        let strokes = word.children[0]
            .shapes
            .iter()
            .filter(|s| matches!(s, Primitive::Segment { .. }))
            .count();
        assert_eq!(strokes, 3);
    }

    #[test]
    fn test_deep_arc_interrupts_rim() {
        // b: two margin arcs + the deep bridge
        let word = word_fragment("b");
        let arcs = word.children[0]
            .shapes
            .iter()
            .filter(|s| matches!(s, Primitive::Arc { .. }))
            .count();
        assert_eq!(arcs, 3);
    }

    #[test]
    fn test_no_paint_attributes_anywhere() {
        // Primitives expose geometry and widths only; this guards the
        // styling contract at the type level by exhaustive match.
        let word = word_fragment("unstyled");
        fn walk(frag: &Fragment) {
            for shape in &frag.shapes {
                match shape {
                    Primitive::Circle { width, .. }
                    | Primitive::Arc { width, .. }
                    | Primitive::Segment { width, .. } => assert!(*width >= 0.0),
                }
            }
            for child in &frag.children {
                walk(child);
            }
        }
        walk(&word);
    }

    #[test]
    fn test_identical_words_render_identically() {
        assert_eq!(word_fragment("stable"), word_fragment("stable"));
    }
}
