//! WASM bindings for route-bundler.
//!
//! Exposes `bundle` and `bundleWithOptions` to JavaScript via wasm-bindgen.
//! Both take the network document as a JSON string and return the bundle
//! document as a JSON string, ready for `JSON.parse` and a force simulation.

use wasm_bindgen::prelude::*;

use crate::config::BundleConfig;

/// Bundle a network with the default 1000×510 canvas.
#[wasm_bindgen]
pub fn bundle(src: &str) -> Result<String, JsError> {
    crate::bundle_json(src, &BundleConfig::default(), false).map_err(|e| JsError::new(&e))
}

/// Bundle a network with an explicit canvas size and control-point range.
#[wasm_bindgen(js_name = "bundleWithOptions")]
pub fn bundle_with_options(
    src: &str,
    width: f64,
    height: f64,
    min_segments: u32,
    max_segments: u32,
) -> Result<String, JsError> {
    let config = BundleConfig {
        width,
        height,
        min_segments,
        max_segments,
    };
    crate::bundle_json(src, &config, false).map_err(|e| JsError::new(&e))
}
