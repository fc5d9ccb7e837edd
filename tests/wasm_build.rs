//! WASM build test
//!
//! Checks that the module works end to end in a browser environment.

use gallifreyan_wasm::api::{to_data_uri, to_gallifreyan};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_basic_conversion() {
    let markup = to_gallifreyan("hello");
    assert!(markup.starts_with("<svg "));
    assert!(markup.contains("generated_svg"));
}

#[wasm_bindgen_test]
fn test_empty_input_yields_container() {
    let markup = to_gallifreyan("");
    assert!(markup.contains("generated_svg"));
    assert!(!markup.contains("all_gall"));
}

#[wasm_bindgen_test]
fn test_data_uri_round_trip() {
    let markup = to_gallifreyan("download");
    let uri = to_data_uri(&markup);
    assert!(uri.starts_with("data:image/svg+xml;base64,"));
}
