//! Segment generator — splits each route into a chain of control points so a
//! force layout can pull nearby routes together into bundles.
//!
//! The generator is a single pass over the links: anchors are copied in
//! pinned, each link gets `segment_count(len)` evenly spaced interior points,
//! and consecutive points are joined by sub-hop links.

pub mod types;

pub use types::{Anchor, Bundle, BundleNode, BundlePath, Link, NodeKind};

use petgraph::graph::{DiGraph, NodeIndex};
use tracing::debug;

use crate::config::BundleConfig;
use crate::geometry::segment_count;
use crate::network::Network;

/// Build the bundling graph for `links` between `anchors`.
///
/// # Panics
///
/// Panics if a link references an anchor index outside `anchors`; endpoints
/// must be resolved before generation.
pub fn generate<A: Anchor>(anchors: &[A], links: &[Link], config: &BundleConfig) -> Bundle {
    let mut graph: DiGraph<BundleNode, ()> = DiGraph::new();
    let mut outgoing: Vec<Vec<usize>> = vec![Vec::new(); anchors.len()];
    let mut paths: Vec<BundlePath> = Vec::with_capacity(links.len());

    for (i, anchor) in anchors.iter().enumerate() {
        graph.add_node(BundleNode::anchor(i, anchor.position()));
    }

    for (route, link) in links.iter().enumerate() {
        assert!(
            link.source < anchors.len() && link.target < anchors.len(),
            "link {route} ({} -> {}) references an anchor outside 0..{}",
            link.source,
            link.target,
            anchors.len()
        );
        let start = anchors[link.source].position();
        let end = anchors[link.target].position();
        let total = segment_count(start.distance(&end), config);

        let mut local: Vec<NodeIndex> = Vec::with_capacity(total + 2);
        let mut previous = NodeIndex::new(link.source);
        local.push(previous);

        // Parameters run over [0, total + 1]; the endpoints sit at 0 and total + 1.
        let denom = (total + 1) as f64;
        for step in 1..=total {
            let position = start.lerp(&end, step as f64 / denom);
            let control = graph.add_node(BundleNode::control(route, step, position));
            graph.add_edge(previous, control, ());
            local.push(control);
            previous = control;
        }

        let target = NodeIndex::new(link.target);
        graph.add_edge(previous, target, ());
        local.push(target);

        outgoing[link.source].push(route);
        paths.push(BundlePath::new(route, local));
    }

    debug!(
        anchors = anchors.len(),
        routes = links.len(),
        controls = graph.node_count() - anchors.len(),
        links = graph.edge_count(),
        "generated bundle"
    );

    Bundle::from_parts(graph, paths, outgoing)
}

/// Generate the bundle for a resolved network.
pub fn generate_network(network: &Network, config: &BundleConfig) -> Bundle {
    let links: Vec<Link> = network
        .routes
        .iter()
        .map(|r| Link::new(r.source, r.target))
        .collect();
    generate(&network.ports, &links, config)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
