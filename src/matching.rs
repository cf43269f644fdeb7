//! Minimum-weight perfect matching over the tree's odd-degree vertices.

use tracing::warn;

use crate::error::{Result, RouteError};
use crate::graph::Graph;

/// Largest odd-vertex set solved exactly. The subset tables hold one entry
/// per vertex subset, about 16 MiB at 20 vertices.
const MAX_EXACT_VERTICES: usize = 20;

/// Vertex-disjoint edges covering the odd-degree vertex set exactly once.
#[derive(Debug, Clone)]
pub struct Matching {
    pub edges: Vec<(usize, usize)>,
    /// False when the odd set exceeded the exact-solvable size and pairs were
    /// chosen greedily, which forfeits the tour-quality bound.
    pub exact: bool,
}

/// Computes a minimum-weight perfect matching over `odd_vertices`.
///
/// Candidate weights are shortest-path distances in the full graph, not the
/// direct edge: the graph is complete so they usually coincide, but a pair
/// left unreachable by the provider can still be matched through an
/// intermediate waypoint.
///
/// An odd-sized input is an internal invariant violation (the odd-degree set
/// of any tree is even) and is reported as a fatal error, not recovered.
pub fn minimum_weight_matching(graph: &Graph, odd_vertices: &[usize]) -> Result<Matching> {
    if odd_vertices.len() % 2 != 0 {
        return Err(RouteError::InvariantViolation(format!(
            "odd-degree vertex set has odd size {}",
            odd_vertices.len()
        )));
    }
    if odd_vertices.is_empty() {
        return Ok(Matching {
            edges: Vec::new(),
            exact: true,
        });
    }

    let k = odd_vertices.len();
    let mut weights = vec![vec![f64::INFINITY; k]; k];
    for (a, &u) in odd_vertices.iter().enumerate() {
        let dist = shortest_paths(graph, u);
        for (b, &v) in odd_vertices.iter().enumerate() {
            weights[a][b] = dist[v];
        }
    }

    let exact = k <= MAX_EXACT_VERTICES;
    let pairs = if exact {
        exact_matching(&weights)
    } else {
        warn!(odd = k, "odd-vertex set too large for exact matching, pairing greedily");
        greedy_matching(&weights)
    };

    let edges = pairs
        .iter()
        .map(|&(a, b)| (odd_vertices[a], odd_vertices[b]))
        .collect();
    Ok(Matching { edges, exact })
}

/// Single-source shortest paths with a dense Dijkstra scan, O(n^2).
fn shortest_paths(graph: &Graph, source: usize) -> Vec<f64> {
    let n = graph.len();
    let mut dist = vec![f64::INFINITY; n];
    let mut done = vec![false; n];
    dist[source] = 0.0;

    for _ in 0..n {
        let mut next = None;
        let mut best = f64::INFINITY;
        for v in 0..n {
            if !done[v] && dist[v] < best {
                best = dist[v];
                next = Some(v);
            }
        }
        let Some(u) = next else { break };
        done[u] = true;

        for v in 0..n {
            if !done[v] {
                let candidate = dist[u] + graph.weight(u, v);
                if candidate < dist[v] {
                    dist[v] = candidate;
                }
            }
        }
    }

    dist
}

/// Exact minimum-weight perfect matching by dynamic programming over vertex
/// subsets. `weights` is a symmetric k x k matrix, k even and non-zero.
fn exact_matching(weights: &[Vec<f64>]) -> Vec<(usize, usize)> {
    let k = weights.len();
    let full = (1usize << k) - 1;
    let mut cost = vec![f64::INFINITY; full + 1];
    let mut choice = vec![usize::MAX; full + 1];
    cost[0] = 0.0;

    for mask in 1..=full {
        // Match the lowest unmatched vertex first; every perfect matching of
        // the subset pairs it with something, so this loses no candidates.
        let first = mask.trailing_zeros() as usize;
        let mut best = f64::INFINITY;
        let mut best_partner = usize::MAX;
        for second in first + 1..k {
            if mask & (1 << second) == 0 {
                continue;
            }
            let rest = mask & !(1 << first) & !(1 << second);
            let candidate = cost[rest] + weights[first][second];
            // `<` alone would never pick a partner when all candidates are
            // infinite; an infinity-weighted pairing is legal when forced.
            if best_partner == usize::MAX || candidate < best {
                best = candidate;
                best_partner = second;
            }
        }
        cost[mask] = best;
        choice[mask] = best_partner;
    }

    let mut pairs = Vec::with_capacity(k / 2);
    let mut mask = full;
    while mask != 0 {
        let first = mask.trailing_zeros() as usize;
        let second = choice[mask];
        pairs.push((first, second));
        mask &= !(1 << first) & !(1 << second);
    }
    pairs
}

/// Greedy fallback: repeatedly take the cheapest pair among unmatched
/// vertices. Not minimum-weight in general.
fn greedy_matching(weights: &[Vec<f64>]) -> Vec<(usize, usize)> {
    let k = weights.len();
    let mut candidates: Vec<(usize, usize)> = (0..k)
        .flat_map(|a| (a + 1..k).map(move |b| (a, b)))
        .collect();
    candidates.sort_by(|&(a, b), &(c, d)| {
        weights[a][b]
            .partial_cmp(&weights[c][d])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut matched = vec![false; k];
    let mut pairs = Vec::with_capacity(k / 2);
    for (a, b) in candidates {
        if !matched[a] && !matched[b] {
            matched[a] = true;
            matched[b] = true;
            pairs.push((a, b));
        }
    }
    pairs
}
