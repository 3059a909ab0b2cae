//! Network resolution — turns keyed port and route records into an indexed
//! network the segment generator can consume.
//!
//! Routes whose endpoints cannot be found, and ports the projection could not
//! place, are dropped here so the generator only ever sees valid anchors.

pub mod types;

pub use types::{Network, Port, ResolveReport, ResolvedRoute, Route};

use std::collections::HashMap;

use tracing::{debug, warn};

/// Resolve route endpoints, accumulate degrees, and drop unusable records.
pub fn resolve(ports: Vec<Port>, routes: &[Route]) -> Network {
    let mut report = ResolveReport::default();

    // Keyed lookup, first port with a key wins.
    let mut ports_by_key: HashMap<String, usize> = HashMap::new();
    let mut kept: Vec<Port> = Vec::with_capacity(ports.len());
    for mut port in ports {
        if port.key.is_empty() {
            report.keyless_ports += 1;
            continue;
        }
        if ports_by_key.contains_key(&port.key) {
            warn!(key = %port.key, "dropping duplicate port");
            report.duplicate_ports += 1;
            continue;
        }
        port.outgoing = 0;
        port.incoming = 0;
        ports_by_key.insert(port.key.clone(), kept.len());
        kept.push(port);
    }
    if report.keyless_ports > 0 {
        warn!(count = report.keyless_ports, "dropping ports without a key");
    }

    // Degrees count every resolvable route, including ones whose endpoint is
    // later removed as unplaced.
    let mut resolved: Vec<(usize, usize, u64)> = Vec::with_capacity(routes.len());
    for route in routes {
        let (Some(&source), Some(&target)) =
            (ports_by_key.get(&route.source), ports_by_key.get(&route.target))
        else {
            warn!(
                source = %route.source,
                target = %route.target,
                "dropping route with unknown endpoint"
            );
            report.unresolved_routes += 1;
            continue;
        };
        kept[source].outgoing = kept[source].outgoing.saturating_add(route.count);
        kept[target].incoming = kept[target].incoming.saturating_add(route.count);
        resolved.push((source, target, route.count));
    }

    // Drop unplaced ports, then order by outgoing degree (stable).
    let mut order: Vec<usize> = Vec::with_capacity(kept.len());
    for (idx, port) in kept.iter().enumerate() {
        if port.position.is_finite() {
            order.push(idx);
        } else {
            warn!(key = %port.key, "dropping port without a projected position");
            report.unplaced_ports += 1;
        }
    }
    order.sort_by(|&a, &b| kept[b].outgoing.cmp(&kept[a].outgoing));

    let mut remap: Vec<Option<usize>> = vec![None; kept.len()];
    for (new_idx, &old_idx) in order.iter().enumerate() {
        remap[old_idx] = Some(new_idx);
    }

    let mut slots: Vec<Option<Port>> = kept.into_iter().map(Some).collect();
    let ports: Vec<Port> = order
        .iter()
        .filter_map(|&old_idx| slots[old_idx].take())
        .collect();

    let mut network_routes = Vec::with_capacity(resolved.len());
    for (source, target, count) in resolved {
        match (remap[source], remap[target]) {
            (Some(source), Some(target)) => network_routes.push(ResolvedRoute {
                source,
                target,
                count,
            }),
            _ => report.orphaned_routes += 1,
        }
    }
    if report.orphaned_routes > 0 {
        warn!(
            count = report.orphaned_routes,
            "dropping routes between unplaced ports"
        );
    }

    debug!(
        ports = ports.len(),
        routes = network_routes.len(),
        dropped_ports = report.dropped_ports(),
        dropped_routes = report.dropped_routes(),
        "resolved network"
    );

    Network {
        ports,
        routes: network_routes,
        report,
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
