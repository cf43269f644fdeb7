//! Eulerian walks over the tree-plus-matching multigraph.

use tracing::warn;

/// Undirected multigraph: parallel edges are legal and expected, since a
/// matching edge may duplicate a tree edge on the same vertex pair.
#[derive(Debug, Clone)]
pub struct Multigraph {
    n: usize,
    adjacency: Vec<Vec<(usize, usize)>>,
    edge_count: usize,
}

impl Multigraph {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            adjacency: vec![Vec::new(); n],
            edge_count: 0,
        }
    }

    pub fn add_edge(&mut self, u: usize, v: usize) {
        let id = self.edge_count;
        self.adjacency[u].push((v, id));
        self.adjacency[v].push((u, id));
        self.edge_count += 1;
    }

    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }
}

/// An ordered sequence of directed edge traversals covering every edge.
#[derive(Debug, Clone)]
pub struct Walk {
    pub edges: Vec<(usize, usize)>,
    /// True when no Eulerian walk existed and the defensive depth-first
    /// traversal was used instead. The route stays valid but the tour-quality
    /// bound no longer applies.
    pub degraded: bool,
}

/// Attempts an Eulerian walk from `source`: a circuit when every vertex has
/// even degree, or a path when exactly `source` and one other vertex are odd.
///
/// Construction guarantees even degree everywhere, so the fallback should be
/// unreachable; it exists so a topological surprise degrades the route
/// instead of failing the request.
pub fn eulerian_walk(graph: &Multigraph, source: usize) -> Walk {
    if let Some(edges) = hierholzer(graph, source) {
        return Walk {
            edges,
            degraded: false,
        };
    }

    warn!(source, "no Eulerian walk from source, falling back to depth-first edge traversal");
    Walk {
        edges: edge_dfs(graph, source),
        degraded: true,
    }
}

/// Hierholzer's algorithm with an explicit stack. Returns `None` when the
/// degree parity rules out an Eulerian walk from `source`, or when some edge
/// is unreachable from `source`.
fn hierholzer(graph: &Multigraph, source: usize) -> Option<Vec<(usize, usize)>> {
    let odd: Vec<usize> = (0..graph.n)
        .filter(|&v| graph.degree(v) % 2 == 1)
        .collect();
    match odd.len() {
        0 => {}
        2 if odd.contains(&source) => {}
        _ => return None,
    }

    let mut next_slot = vec![0usize; graph.n];
    let mut used = vec![false; graph.edge_count];
    let mut stack = vec![source];
    let mut trail = Vec::with_capacity(graph.edge_count + 1);

    while let Some(&v) = stack.last() {
        let mut advanced = false;
        while next_slot[v] < graph.adjacency[v].len() {
            let (to, id) = graph.adjacency[v][next_slot[v]];
            next_slot[v] += 1;
            if !used[id] {
                used[id] = true;
                stack.push(to);
                advanced = true;
                break;
            }
        }
        if !advanced {
            trail.push(v);
            stack.pop();
        }
    }

    // A shortfall means edges were left in another component.
    if trail.len() != graph.edge_count + 1 {
        return None;
    }

    trail.reverse();
    Some(trail.windows(2).map(|pair| (pair[0], pair[1])).collect())
}

/// Defensive fallback: emits every edge exactly once in depth-first discovery
/// order, sweeping components unreachable from `source` as well so no edge is
/// dropped. Consecutive edges need not share endpoints.
fn edge_dfs(graph: &Multigraph, source: usize) -> Vec<(usize, usize)> {
    let mut used = vec![false; graph.edge_count];
    let mut visited = vec![false; graph.n];
    let mut edges = Vec::with_capacity(graph.edge_count);

    let roots = std::iter::once(source).chain((0..graph.n).filter(|&v| v != source));
    for root in roots {
        if visited[root] {
            continue;
        }
        let mut stack = vec![root];
        while let Some(v) = stack.pop() {
            visited[v] = true;
            for &(to, id) in &graph.adjacency[v] {
                if !used[id] {
                    used[id] = true;
                    edges.push((v, to));
                    stack.push(to);
                }
            }
        }
    }

    edges
}
