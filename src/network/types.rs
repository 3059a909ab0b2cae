//! Port and route records.
//!
//! Every field a port picks up during processing (degree totals) is declared
//! here with a default instead of being attached later.

use crate::geometry::Position;

// ─── Port ────────────────────────────────────────────────────────────────────

/// A port (or airport): an anchor node with a projected position.
#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    /// Unique lookup key (e.g. a UN/LOCODE or IATA code).
    pub key: String,
    pub name: String,
    pub city: String,
    pub state: String,
    pub position: Position,
    /// Sum of `count` over resolved routes leaving this port.
    pub outgoing: u64,
    /// Sum of `count` over resolved routes arriving at this port.
    pub incoming: u64,
}

impl Port {
    pub fn new(key: impl Into<String>, position: Position) -> Self {
        Self {
            key: key.into(),
            name: String::new(),
            city: String::new(),
            state: String::new(),
            position,
            outgoing: 0,
            incoming: 0,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Tooltip text: "name in city, state", omitting empty parts.
    pub fn describe(&self) -> String {
        let place: Vec<&str> = [self.city.as_str(), self.state.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        let name = if self.name.is_empty() {
            self.key.as_str()
        } else {
            self.name.as_str()
        };
        if place.is_empty() {
            name.to_string()
        } else {
            format!("{} in {}", name, place.join(", "))
        }
    }
}

// ─── Route ───────────────────────────────────────────────────────────────────

/// A directed route between two ports, referenced by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub source: String,
    pub target: String,
    /// Number of voyages (or flights) along this route.
    pub count: u64,
}

impl Route {
    pub fn new(source: impl Into<String>, target: impl Into<String>, count: u64) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            count,
        }
    }
}

// ─── ResolvedRoute ───────────────────────────────────────────────────────────

/// A route whose endpoints are indices into [`Network::ports`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedRoute {
    pub source: usize,
    pub target: usize,
    pub count: u64,
}

// ─── ResolveReport ───────────────────────────────────────────────────────────

/// Counts of records dropped while resolving a network.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveReport {
    /// Ports without a key.
    pub keyless_ports: usize,
    /// Ports whose key was already taken by an earlier port.
    pub duplicate_ports: usize,
    /// Ports the projection could not place.
    pub unplaced_ports: usize,
    /// Routes referencing a key that no port carries.
    pub unresolved_routes: usize,
    /// Routes whose endpoint was removed as unplaced.
    pub orphaned_routes: usize,
}

impl ResolveReport {
    pub fn dropped_routes(&self) -> usize {
        self.unresolved_routes + self.orphaned_routes
    }

    pub fn dropped_ports(&self) -> usize {
        self.keyless_ports + self.duplicate_ports + self.unplaced_ports
    }
}

// ─── Network ─────────────────────────────────────────────────────────────────

/// Ports and routes ready for the segment generator.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Placed ports ordered by outgoing degree, busiest first.
    pub ports: Vec<Port>,
    pub routes: Vec<ResolvedRoute>,
    pub report: ResolveReport,
}

impl Network {
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty() && self.routes.is_empty()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
