//! Route optimizer facade: Christofides-style tour construction.
//!
//! Orchestrates graph build, minimum spanning tree, odd-vertex matching,
//! Eulerian walk and Hamiltonian shortcutting. This is the only entry point
//! the surrounding service calls; each invocation is a pure function of the
//! inputs and the provider's answers, with no state shared across calls.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::euler::{Multigraph, eulerian_walk};
use crate::graph::Graph;
use crate::matching::minimum_weight_matching;
use crate::mst::minimum_spanning_tree;
use crate::shortcut::shortcut;
use crate::traits::DistanceProvider;
use crate::waypoint::Waypoint;

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Zero-based index of the required first waypoint. Out-of-range values
    /// (including negative) are normalized to 0.
    pub start_index: i64,
    /// Required last waypoint for an open path. `None`, out-of-range values,
    /// or an end equal to the start select cycle mode instead.
    pub end_index: Option<i64>,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            start_index: 0,
            end_index: None,
        }
    }
}

/// Whether the full quality guarantee of the heuristic held for this route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteQuality {
    /// Exact matching and a true Eulerian walk: the approximate 3/2 bound
    /// applies (approximate because road distances satisfy the triangle
    /// inequality only approximately).
    Optimal,
    /// A defensive fallback ran; the route is complete and valid but the
    /// quality bound no longer applies.
    Degraded,
}

/// An optimized visiting order.
///
/// Cycle mode (no end constraint) returns `n + 1` entries, the last being a
/// repeat of the start waypoint that closes the tour; path mode returns
/// exactly `n`. `leg_costs` holds one cost per consecutive pair, read back
/// from the built graph rather than re-queried from the provider.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizedRoute {
    pub waypoints: Vec<Waypoint>,
    pub indices: Vec<usize>,
    pub leg_costs: Vec<f64>,
    pub total_cost: f64,
    pub quality: RouteQuality,
}

/// Computes a short visiting order over `waypoints`.
///
/// Fewer than two waypoints is a no-op, not an error: the input comes back
/// unchanged. Callers that require at least two points must validate earlier.
pub fn optimize<P>(
    waypoints: &[Waypoint],
    options: &OptimizeOptions,
    provider: &P,
) -> Result<OptimizedRoute>
where
    P: DistanceProvider + Sync,
{
    let n = waypoints.len();
    if n < 2 {
        return Ok(OptimizedRoute {
            waypoints: waypoints.to_vec(),
            indices: (0..n).collect(),
            leg_costs: Vec::new(),
            total_cost: 0.0,
            quality: RouteQuality::Optimal,
        });
    }

    let (start, end) = normalize_indices(n, options);

    let graph = Graph::build(waypoints, provider)?;
    let tree = minimum_spanning_tree(&graph)?;
    debug!(vertices = n, tree_edges = tree.edges.len(), "spanning tree built");

    let odd = tree.odd_vertices();
    let matching = minimum_weight_matching(&graph, &odd)?;
    debug!(odd = odd.len(), matched = matching.edges.len(), "odd vertices matched");

    let mut multigraph = Multigraph::new(n);
    for &(u, v) in &tree.edges {
        multigraph.add_edge(u, v);
    }
    for &(u, v) in &matching.edges {
        multigraph.add_edge(u, v);
    }

    let walk = eulerian_walk(&multigraph, start);
    let indices = shortcut(&walk.edges, start, end);

    let leg_costs: Vec<f64> = indices
        .windows(2)
        .map(|leg| graph.weight(leg[0], leg[1]))
        .collect();
    let total_cost = leg_costs.iter().sum();
    let quality = if walk.degraded || !matching.exact {
        RouteQuality::Degraded
    } else {
        RouteQuality::Optimal
    };

    Ok(OptimizedRoute {
        waypoints: indices.iter().map(|&i| waypoints[i].clone()).collect(),
        indices,
        leg_costs,
        total_cost,
        quality,
    })
}

/// Clamps the requested indices against the waypoint count: out-of-range
/// start falls back to 0, out-of-range end clears the end constraint, and an
/// end equal to the start with more than two waypoints is a plain cycle,
/// since a zero-length closing leg is meaningless.
fn normalize_indices(n: usize, options: &OptimizeOptions) -> (usize, Option<usize>) {
    let start = if options.start_index < 0 || options.start_index >= n as i64 {
        0
    } else {
        options.start_index as usize
    };

    let end = options.end_index.and_then(|raw| {
        if raw < 0 || raw >= n as i64 {
            return None;
        }
        let end = raw as usize;
        if end == start && n > 2 { None } else { Some(end) }
    });

    (start, end)
}
