//! route-bundler — edge-bundling segment generator for port and vessel route maps.
//!
//! Public API: `bundle_json()` for the JSON-in/JSON-out pipeline, and
//! [`bundle::generate`] for callers that already hold positioned anchors.

pub mod bundle;
pub mod config;
pub mod export;
pub mod geometry;
pub mod network;

#[cfg(feature = "wasm")]
pub mod wasm;

use crate::bundle::generate_network;
use crate::config::BundleConfig;
use crate::export::{BundleDocument, parse_network};
use crate::network::resolve;

/// Resolve a network document, generate its bundle, and serialize the result.
pub fn bundle_json(src: &str, config: &BundleConfig, pretty: bool) -> Result<String, String> {
    config.validate()?;
    let (ports, routes) = parse_network(src)?;
    let network = resolve(ports, &routes);
    let bundle = generate_network(&network, config);
    BundleDocument::from_bundle(&bundle, &network.ports).to_json(pretty)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
