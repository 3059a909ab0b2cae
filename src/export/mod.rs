//! JSON documents read and written by the CLI and WASM front ends.
//!
//! The input document carries already-projected ports and keyed routes. The
//! output document is shaped for a d3-style force simulation: node objects
//! with `fx`/`fy` pins, index-based links, and one index list per path.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::bundle::{Bundle, NodeKind};
use crate::geometry::Position;
use crate::network::{Port, Route};

// ─── Input ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NetworkDocument {
    #[serde(default)]
    pub ports: Vec<PortRecord>,
    #[serde(default)]
    pub routes: Vec<RouteRecord>,
}

/// A port as it arrives from the loader; `null` coordinates mean the
/// projection could not place it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortRecord {
    #[serde(default, alias = "iata")]
    pub key: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RouteRecord {
    #[serde(alias = "LPOC")]
    pub source: String,
    #[serde(alias = "PORT")]
    pub target: String,
    #[serde(default = "default_count")]
    pub count: u64,
}

fn default_count() -> u64 {
    1
}

impl From<PortRecord> for Port {
    fn from(r: PortRecord) -> Self {
        let position = Position::new(r.x.unwrap_or(f64::NAN), r.y.unwrap_or(f64::NAN));
        let mut port = Port::new(r.key, position).with_name(r.name);
        port.city = r.city;
        port.state = r.state;
        port
    }
}

impl From<RouteRecord> for Route {
    fn from(r: RouteRecord) -> Self {
        Route::new(r.source, r.target, r.count)
    }
}

/// Parse an input document into port and route records.
pub fn parse_network(src: &str) -> Result<(Vec<Port>, Vec<Route>), String> {
    let doc: NetworkDocument =
        serde_json::from_str(src).map_err(|e| format!("invalid network document: {e}"))?;
    let ports = doc.ports.into_iter().map(Port::from).collect();
    let routes = doc.routes.into_iter().map(Route::from).collect();
    Ok((ports, routes))
}

// ─── Output ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct NodeRecord {
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fx: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fy: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkRecord {
    pub source: usize,
    pub target: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BundleDocument {
    pub nodes: Vec<NodeRecord>,
    pub links: Vec<LinkRecord>,
    pub paths: Vec<Vec<usize>>,
    /// Port key → indices of the paths leaving it.
    pub outgoing: BTreeMap<String, Vec<usize>>,
}

impl BundleDocument {
    /// Build the output document. `ports` must be the anchors `bundle` was
    /// generated from.
    pub fn from_bundle(bundle: &Bundle, ports: &[Port]) -> Self {
        let nodes = bundle
            .nodes()
            .map(|(_, node)| {
                let port = match node.kind {
                    NodeKind::Anchor { anchor } => ports.get(anchor),
                    NodeKind::Control { .. } => None,
                };
                NodeRecord {
                    x: node.position.x,
                    y: node.position.y,
                    fx: node.pinned.map(|p| p.x),
                    fy: node.pinned.map(|p| p.y),
                    key: port.map(|p| p.key.clone()),
                    label: port.map(Port::describe),
                }
            })
            .collect();

        let links = bundle
            .links()
            .map(|(s, t)| LinkRecord {
                source: s.index(),
                target: t.index(),
            })
            .collect();

        let paths = bundle
            .paths()
            .iter()
            .map(|p| p.nodes().iter().map(|n| n.index()).collect())
            .collect();

        let outgoing = ports
            .iter()
            .enumerate()
            .filter(|(i, _)| !bundle.outgoing_paths(*i).is_empty())
            .map(|(i, p)| (p.key.clone(), bundle.outgoing_paths(i).to_vec()))
            .collect();

        Self {
            nodes,
            links,
            paths,
            outgoing,
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String, String> {
        let out = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        out.map_err(|e| format!("cannot serialize bundle: {e}"))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
