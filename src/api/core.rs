//! Conversion entry points for the WASM boundary

use wasm_bindgen::prelude::*;

use crate::convert::{convert, convert_with};
use crate::models::config::ConvertOptions;

/// Convert text to circular-script SVG with default options.
///
/// The lenient page-facing entry point: warnings go to the console and
/// a failed conversion renders as a short html fragment instead of
/// throwing, so the page can always inject the result.
#[wasm_bindgen(js_name = toGallifreyan)]
pub fn to_gallifreyan(text: &str) -> String {
    match convert(text) {
        Ok(conversion) => {
            for warning in &conversion.warnings {
                log::warn!("{}", warning);
            }
            conversion.svg
        }
        Err(error) => {
            log::error!("conversion failed: {}", error);
            format!("<p>{}</p>", error)
        }
    }
}

/// Convert text under caller-supplied options.
///
/// `options` is a plain object deserialized into [`ConvertOptions`];
/// pass `undefined` for the defaults. Returns `{svg, warnings}` or
/// throws with the error message.
#[wasm_bindgen(js_name = convertText)]
pub fn convert_text(text: &str, options: JsValue) -> Result<JsValue, JsValue> {
    let options: ConvertOptions = if options.is_undefined() || options.is_null() {
        ConvertOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("invalid options: {}", e)))?
    };

    let conversion = convert_with(text, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&conversion)
        .map_err(|e| JsValue::from_str(&format!("serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_entry_never_panics_on_odd_input() {
        for text in ["", "hello world", "???", "日本語", "-12.5"] {
            let markup = to_gallifreyan(text);
            assert!(!markup.is_empty());
        }
    }

    #[test]
    fn test_lenient_entry_returns_svg_for_convertible_text() {
        let markup = to_gallifreyan("hello");
        assert!(markup.starts_with("<svg "));
        assert!(markup.contains("all_gall"));
    }
}
