//! Export adapter
//!
//! The two operations the page glue needs after conversion: copy the
//! displayed element's computed stroke/fill onto the markup's root,
//! and encode the result as a base64 data URI for download. The core
//! renderer never emits paint, which is what makes the first operation
//! possible.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::Cursor;
use wasm_bindgen::prelude::*;

/// Set `stroke` and `fill` on the markup's root element.
///
/// Any existing paints on the root are replaced; the rest of the
/// document passes through untouched.
pub fn apply_root_style(svg: &str, stroke: &str, fill: &str) -> Result<String, String> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Cursor::new(Vec::new()));
    let mut root_seen = false;

    loop {
        let event = reader.read_event().map_err(|e| e.to_string())?;
        match event {
            Event::Eof => break,
            Event::Start(start) if !root_seen => {
                root_seen = true;
                let restyled = restyle(&start, stroke, fill).map_err(|e| e.to_string())?;
                writer
                    .write_event(Event::Start(restyled))
                    .map_err(|e| e.to_string())?;
            }
            Event::Empty(start) if !root_seen => {
                root_seen = true;
                let restyled = restyle(&start, stroke, fill).map_err(|e| e.to_string())?;
                writer
                    .write_event(Event::Empty(restyled))
                    .map_err(|e| e.to_string())?;
            }
            other => {
                writer.write_event(other).map_err(|e| e.to_string())?;
            }
        }
    }

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| e.to_string())
}

fn restyle(
    element: &BytesStart,
    stroke: &str,
    fill: &str,
) -> Result<BytesStart<'static>, quick_xml::events::attributes::AttrError> {
    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    let mut restyled = BytesStart::new(name);
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.as_ref() != b"stroke" && attribute.key.as_ref() != b"fill" {
            restyled.push_attribute(attribute);
        }
    }
    restyled.push_attribute(("stroke", stroke));
    restyled.push_attribute(("fill", fill));
    Ok(restyled)
}

/// Encode markup as a `data:image/svg+xml;base64,…` URI.
pub fn to_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// WASM wrapper over [`apply_root_style`].
#[wasm_bindgen(js_name = applyRootStyle)]
pub fn apply_root_style_js(svg: &str, stroke: &str, fill: &str) -> Result<String, JsValue> {
    apply_root_style(svg, stroke, fill).map_err(|e| JsValue::from_str(&e))
}

/// WASM wrapper over [`to_data_uri`].
#[wasm_bindgen(js_name = toDataUri)]
pub fn to_data_uri_js(svg: &str) -> String {
    to_data_uri(svg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine as _;

    #[test]
    fn test_apply_root_style_sets_paints_on_root_only() {
        let svg = r#"<svg id="generated_svg"><g class="sentence"><circle cx="0" cy="0" r="10" fill="none" stroke-width="2"/></g></svg>"#;
        let styled = apply_root_style(svg, "rgb(20, 20, 20)", "rgb(200, 0, 0)").unwrap();
        assert!(styled.starts_with(r#"<svg id="generated_svg" stroke="rgb(20, 20, 20)" fill="rgb(200, 0, 0)">"#));
        // Inner fill="none" survives untouched
        assert!(styled.contains(r#"fill="none""#));
    }

    #[test]
    fn test_apply_root_style_replaces_existing_paints() {
        let svg = r#"<svg stroke="old" fill="old"><g/></svg>"#;
        let styled = apply_root_style(svg, "new", "newer").unwrap();
        assert!(!styled.contains("old"));
        assert!(styled.contains(r#"stroke="new""#));
        assert!(styled.contains(r#"fill="newer""#));
    }

    #[test]
    fn test_apply_root_style_round_trips_generated_markup() {
        let conversion = crate::convert::convert("style me").unwrap();
        let styled = apply_root_style(&conversion.svg, "#000", "#fff").unwrap();
        assert!(styled.contains(r##"stroke="#000""##));
        assert!(styled.contains(r#"id="all_gall""#));
    }

    #[test]
    fn test_data_uri_prefix_and_payload() {
        let uri = to_data_uri("<svg/>");
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        let payload = uri.trim_start_matches("data:image/svg+xml;base64,");
        assert_eq!(STANDARD.decode(payload).unwrap(), b"<svg/>");
    }
}
