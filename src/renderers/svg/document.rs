//! SVG document assembly
//!
//! Builds the full document: root `<svg>` with a viewBox sized to the
//! sentence ring plus margin, the sentence group with its double outer
//! ring, and one group per word. Assembly is all-or-nothing: the
//! writer targets an in-memory buffer and the result is returned as a
//! single string.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;

use crate::layout::geometry::{round2, Point};
use crate::layout::sentence::{SentenceLayout, WordUnit};
use crate::layout::WORD_BASE_RADIUS;
use crate::renderers::digits::render_number;
use crate::renderers::glyph::render_word;
use crate::renderers::shapes::{Fragment, Primitive, Weight};

use super::elements::write_fragment;

/// Stable id on the root element; callers select and restyle it
pub const ROOT_ID: &str = "generated_svg";

/// Id of the sentence group, present only when something rendered
pub const SENTENCE_ID: &str = "all_gall";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Gap between the two circles of the sentence ring
const RING_GAP: f64 = 8.0;

/// viewBox side for the empty document
const EMPTY_SIDE: f64 = 100.0;

/// Serialize a positioned sentence to SVG markup.
///
/// An empty layout yields a minimal well-formed container with the
/// stable root id and no sentence group.
pub fn render_svg(sentence: &SentenceLayout) -> String {
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    write_document(&mut writer, sentence).expect("in-memory SVG assembly cannot fail");
    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).expect("SVG writer emits UTF-8")
}

fn write_document(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    sentence: &SentenceLayout,
) -> quick_xml::Result<()> {
    let side = if sentence.is_empty() {
        EMPTY_SIDE
    } else {
        sentence.canvas
    };
    let half = round2(side / 2.0);
    let side = round2(side);

    let view_box = format!("{} {} {} {}", -half, -half, side, side);
    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("id", ROOT_ID));
    root.push_attribute(("viewBox", view_box.as_str()));
    root.push_attribute(("width", side.to_string().as_str()));
    root.push_attribute(("height", side.to_string().as_str()));
    writer.write_event(Event::Start(root))?;

    if !sentence.is_empty() {
        let fragment = sentence_fragment(sentence);
        write_fragment(writer, &fragment, Some(SENTENCE_ID))?;
    }

    writer.write_event(Event::End(BytesEnd::new("svg")))
}

/// The sentence group: double outer ring plus one fragment per word
fn sentence_fragment(sentence: &SentenceLayout) -> Fragment {
    let mut frag = Fragment::new("sentence");
    let scale = (sentence.radius / (2.0 * WORD_BASE_RADIUS)).max(1.0);

    frag.push(Primitive::stroked_circle(
        Point::origin(),
        sentence.radius,
        Weight::Thick.width(scale),
    ));
    frag.push(Primitive::stroked_circle(
        Point::origin(),
        sentence.radius - RING_GAP * scale,
        Weight::Thin.width(scale),
    ));

    for word in &sentence.words {
        frag.children.push(match word {
            WordUnit::Script(layout) => render_word(layout),
            WordUnit::Number(layout) => render_number(layout),
        });
    }
    frag
}
