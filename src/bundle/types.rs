//! Bundle types: BundleNode, BundlePath, Bundle, Link.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;

use crate::geometry::Position;
use crate::network::Port;

// ─── Anchor ──────────────────────────────────────────────────────────────────

/// Anything with a fixed, caller-supplied position.
pub trait Anchor {
    fn position(&self) -> Position;
}

impl Anchor for Position {
    fn position(&self) -> Position {
        *self
    }
}

impl Anchor for Port {
    fn position(&self) -> Position {
        self.position
    }
}

// ─── Link ────────────────────────────────────────────────────────────────────

/// A directed edge between two anchors, referenced by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub source: usize,
    pub target: usize,
}

impl Link {
    pub fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }
}

// ─── BundleNode ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The anchor at this index in the generator input.
    Anchor { anchor: usize },
    /// Interior point `step` (1-based) of path `path`.
    Control { path: usize, step: usize },
}

/// A node in the bundling graph.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleNode {
    pub kind: NodeKind,
    pub position: Position,
    /// Fixed-position hint for the layout engine; set on anchors only.
    pub pinned: Option<Position>,
}

impl BundleNode {
    pub fn anchor(anchor: usize, position: Position) -> Self {
        Self {
            kind: NodeKind::Anchor { anchor },
            position,
            pinned: Some(position),
        }
    }

    pub fn control(path: usize, step: usize, position: Position) -> Self {
        Self {
            kind: NodeKind::Control { path, step },
            position,
            pinned: None,
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self.kind, NodeKind::Anchor { .. })
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}

// ─── BundlePath ──────────────────────────────────────────────────────────────

/// The full polyline of one input link, source anchor to target anchor.
///
/// Always holds at least the two anchor endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundlePath {
    route: usize,
    nodes: Vec<NodeIndex>,
}

impl BundlePath {
    pub(super) fn new(route: usize, nodes: Vec<NodeIndex>) -> Self {
        assert!(nodes.len() >= 2, "path needs both endpoints");
        Self { route, nodes }
    }

    /// Index of the input link this path was generated from.
    pub fn route(&self) -> usize {
        self.route
    }

    /// Nodes in traversal order, source anchor first.
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    pub fn source(&self) -> NodeIndex {
        self.nodes[0]
    }

    pub fn target(&self) -> NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    /// Interior control points on this path.
    pub fn control_count(&self) -> usize {
        self.nodes.len().saturating_sub(2)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

// ─── Bundle ──────────────────────────────────────────────────────────────────

/// Output of the segment generator.
///
/// Node indices `0..anchor_count()` are the input anchors in input order;
/// control nodes follow. Graph edges are the sub-hop links in emission order.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    graph: DiGraph<BundleNode, ()>,
    paths: Vec<BundlePath>,
    /// Per anchor: indices of paths that start at it.
    outgoing: Vec<Vec<usize>>,
}

impl Bundle {
    pub(super) fn from_parts(
        graph: DiGraph<BundleNode, ()>,
        paths: Vec<BundlePath>,
        outgoing: Vec<Vec<usize>>,
    ) -> Self {
        Self {
            graph,
            paths,
            outgoing,
        }
    }

    pub fn node(&self, idx: NodeIndex) -> &BundleNode {
        &self.graph[idx]
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &BundleNode)> + '_ {
        self.graph
            .node_indices()
            .map(move |idx| (idx, &self.graph[idx]))
    }

    /// Sub-hop links as `(source, target)` pairs in emission order.
    pub fn links(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph
            .edge_references()
            .map(|e| (e.source(), e.target()))
    }

    pub fn paths(&self) -> &[BundlePath] {
        &self.paths
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn anchor_count(&self) -> usize {
        self.outgoing.len()
    }

    pub fn control_count(&self) -> usize {
        self.node_count() - self.anchor_count()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0 && self.paths.is_empty()
    }

    /// Paths leaving the given anchor, for highlighting its routes.
    pub fn outgoing_paths(&self, anchor: usize) -> &[usize] {
        self.outgoing.get(anchor).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Current positions along a path, in traversal order.
    pub fn path_positions(&self, path: &BundlePath) -> Vec<Position> {
        path.nodes.iter().map(|&n| self.graph[n].position).collect()
    }

    /// Positions along a path that a line renderer can draw.
    pub fn drawable_points(&self, path: &BundlePath) -> Vec<Position> {
        path.nodes
            .iter()
            .map(|&n| self.graph[n].position)
            .filter(Position::is_finite)
            .collect()
    }

    /// Move a control node. Pinned nodes refuse to move.
    pub fn move_control(&mut self, idx: NodeIndex, position: Position) -> Result<(), String> {
        let Some(node) = self.graph.node_weight_mut(idx) else {
            return Err(format!("no bundle node at index {}", idx.index()));
        };
        if node.is_pinned() {
            return Err(format!("node {} is pinned", idx.index()));
        }
        node.position = position;
        Ok(())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
