//! Minimum spanning tree over the complete distance graph.

use crate::error::{Result, RouteError};
use crate::graph::Graph;

/// A minimum-weight spanning tree: `n - 1` edges, connected, acyclic.
///
/// Tie-breaking between equal-weight edges is unspecified and not stable
/// across changes; consumers may rely on total weight and tree validity only.
#[derive(Debug, Clone)]
pub struct SpanningTree {
    n: usize,
    pub edges: Vec<(usize, usize)>,
}

impl SpanningTree {
    pub fn total_weight(&self, graph: &Graph) -> f64 {
        self.edges.iter().map(|&(u, v)| graph.weight(u, v)).sum()
    }

    /// Vertices with an odd number of tree edges. Always even-sized for a
    /// valid tree, by the handshake lemma.
    pub fn odd_vertices(&self) -> Vec<usize> {
        let mut degree = vec![0usize; self.n];
        for &(u, v) in &self.edges {
            degree[u] += 1;
            degree[v] += 1;
        }
        (0..self.n).filter(|&v| degree[v] % 2 == 1).collect()
    }
}

/// Prim's algorithm with a linear key scan, O(n^2). The graph is complete,
/// so the dense scan beats a heap here.
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree> {
    let n = graph.len();
    let mut in_tree = vec![false; n];
    let mut key = vec![f64::INFINITY; n];
    let mut parent = vec![usize::MAX; n];
    key[0] = 0.0;

    let mut edges = Vec::with_capacity(n.saturating_sub(1));
    for _ in 0..n {
        let mut next = None;
        let mut best = f64::INFINITY;
        for v in 0..n {
            if !in_tree[v] && key[v] < best {
                best = key[v];
                next = Some(v);
            }
        }

        let Some(u) = next else {
            // Every edge into the remaining vertices is infinite.
            let stranded = (0..n).find(|&v| !in_tree[v]).unwrap_or(0);
            return Err(RouteError::DisconnectedGraph { vertex: stranded });
        };

        in_tree[u] = true;
        if parent[u] != usize::MAX {
            edges.push((parent[u], u));
        }

        for v in 0..n {
            if !in_tree[v] && graph.weight(u, v) < key[v] {
                key[v] = graph.weight(u, v);
                parent[v] = u;
            }
        }
    }

    Ok(SpanningTree { n, edges })
}
