//! Primitive → SVG element serialization
//!
//! Writes fragments and primitives as `<g>`, `<circle>` and `<path>`
//! elements. No stroke or fill paint is ever emitted; stroked shapes
//! carry `fill="none"` purely to select outline rendering, and the
//! inherited paints come from whatever the caller puts on the root.

use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Cursor;

use crate::layout::geometry::{round2, Point};
use crate::renderers::shapes::{Fragment, Primitive};

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Shortest decimal form of a rounded coordinate
fn num(v: f64) -> String {
    round2(v).to_string()
}

/// Write a fragment subtree as nested groups.
pub fn write_fragment(
    writer: &mut XmlWriter,
    fragment: &Fragment,
    id: Option<&str>,
) -> quick_xml::Result<()> {
    let mut group = BytesStart::new("g");
    if let Some(id) = id {
        group.push_attribute(("id", id));
    }
    if !fragment.class.is_empty() {
        group.push_attribute(("class", fragment.class.as_str()));
    }
    writer.write_event(Event::Start(group))?;

    for shape in &fragment.shapes {
        write_primitive(writer, shape)?;
    }
    for child in &fragment.children {
        write_fragment(writer, child, None)?;
    }

    writer.write_event(Event::End(BytesEnd::new("g")))
}

/// Write one primitive element.
pub fn write_primitive(writer: &mut XmlWriter, shape: &Primitive) -> quick_xml::Result<()> {
    match shape {
        Primitive::Circle {
            center,
            radius,
            filled,
            width,
        } => {
            let mut circle = BytesStart::new("circle");
            circle.push_attribute(("cx", num(center.x).as_str()));
            circle.push_attribute(("cy", num(center.y).as_str()));
            circle.push_attribute(("r", num(*radius).as_str()));
            if !filled {
                circle.push_attribute(("fill", "none"));
                circle.push_attribute(("stroke-width", num(*width).as_str()));
            }
            writer.write_event(Event::Empty(circle))
        }
        Primitive::Arc {
            from,
            to,
            radius,
            large,
            sweep,
            width,
        } => {
            let d = arc_path(*from, *to, *radius, *large, *sweep);
            write_path(writer, &d, *width)
        }
        Primitive::Segment { from, to, width } => {
            let d = format!(
                "M {} {} L {} {}",
                num(from.x),
                num(from.y),
                num(to.x),
                num(to.y)
            );
            write_path(writer, &d, *width)
        }
    }
}

fn write_path(writer: &mut XmlWriter, d: &str, width: f64) -> quick_xml::Result<()> {
    let mut path = BytesStart::new("path");
    path.push_attribute(("d", d));
    path.push_attribute(("fill", "none"));
    path.push_attribute(("stroke-width", num(width).as_str()));
    writer.write_event(Event::Empty(path))
}

fn arc_path(from: Point, to: Point, radius: f64, large: bool, sweep: bool) -> String {
    format!(
        "M {} {} A {} {} 0 {} {} {} {}",
        num(from.x),
        num(from.y),
        num(radius),
        num(radius),
        u8::from(large),
        u8::from(sweep),
        num(to.x),
        num(to.y)
    )
}
