//! Complete distance graph over waypoint indices.

use rayon::prelude::*;
use tracing::warn;

use crate::error::{Result, RouteError};
use crate::traits::DistanceProvider;
use crate::waypoint::Waypoint;

/// Symmetric weighted graph over vertices `0..n`, one vertex per waypoint.
///
/// Complete once built: every unordered pair carries a weight, with
/// unreachable pairs stored as `f64::INFINITY` rather than zero so they are
/// never mistaken for free edges.
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    weights: Vec<f64>,
}

impl Graph {
    /// Builds the complete graph by querying the provider once per unordered
    /// pair, Theta(n^2) calls in total.
    ///
    /// Pair queries run in parallel; results are merged keyed by vertex pair,
    /// so the graph is identical across calls for a deterministic provider
    /// regardless of which queries finish first. A provider failure degrades
    /// the pair to an infinite weight instead of failing the build.
    pub fn build<P>(waypoints: &[Waypoint], provider: &P) -> Result<Self>
    where
        P: DistanceProvider + Sync,
    {
        let n = waypoints.len();
        if n < 2 {
            return Err(RouteError::InsufficientInput { got: n });
        }

        let pairs: Vec<(usize, usize)> = (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .collect();

        let costs: Vec<((usize, usize), f64)> = pairs
            .par_iter()
            .map(|&(i, j)| {
                let cost = provider
                    .distance(waypoints[i].coords(), waypoints[j].coords())
                    .unwrap_or(f64::INFINITY);
                ((i, j), cost)
            })
            .collect();

        let mut weights = vec![0.0; n * n];
        for ((i, j), cost) in costs {
            if cost.is_infinite() {
                warn!(i, j, "no route between waypoint pair, treating as unreachable");
            }
            weights[i * n + j] = cost;
            weights[j * n + i] = cost;
        }

        Ok(Self { n, weights })
    }

    /// Test-friendly constructor from an explicit weight function.
    #[cfg(test)]
    pub(crate) fn from_fn(n: usize, weight: impl Fn(usize, usize) -> f64) -> Self {
        let mut weights = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    weights[i * n + j] = weight(i.min(j), i.max(j));
                }
            }
        }
        Self { n, weights }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of the edge between `i` and `j`; zero on the diagonal.
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LineProvider;

    impl DistanceProvider for LineProvider {
        fn distance(&self, from: (f64, f64), to: (f64, f64)) -> Option<f64> {
            Some((from.0 - to.0).abs())
        }
    }

    /// Fails for any pair touching the given coordinate.
    struct OutageProvider {
        dead: (f64, f64),
    }

    impl DistanceProvider for OutageProvider {
        fn distance(&self, from: (f64, f64), to: (f64, f64)) -> Option<f64> {
            if from == self.dead || to == self.dead {
                None
            } else {
                Some((from.0 - to.0).abs())
            }
        }
    }

    fn line_waypoints(n: usize) -> Vec<Waypoint> {
        (0..n)
            .map(|i| Waypoint::new(format!("wp-{i}"), i as f64, 0.0))
            .collect()
    }

    #[test]
    fn build_rejects_fewer_than_two_waypoints() {
        let result = Graph::build(&line_waypoints(1), &LineProvider);
        assert!(matches!(
            result,
            Err(RouteError::InsufficientInput { got: 1 })
        ));
    }

    #[test]
    fn build_is_complete_and_symmetric() {
        let graph = Graph::build(&line_waypoints(4), &LineProvider).unwrap();
        for i in 0..4 {
            for j in 0..4 {
                if i == j {
                    assert_eq!(graph.weight(i, j), 0.0);
                } else {
                    assert_eq!(graph.weight(i, j), (i as f64 - j as f64).abs());
                    assert_eq!(graph.weight(i, j), graph.weight(j, i));
                }
            }
        }
    }

    #[test]
    fn provider_failure_becomes_infinity() {
        let provider = OutageProvider { dead: (2.0, 0.0) };
        let graph = Graph::build(&line_waypoints(4), &provider).unwrap();
        assert!(graph.weight(0, 2).is_infinite());
        assert!(graph.weight(2, 3).is_infinite());
        assert_eq!(graph.weight(0, 1), 1.0);
    }
}
