//! route-optimizer core
//!
//! Christofides-style route optimization over geographic waypoints: minimum
//! spanning tree, minimum-weight matching of odd-degree vertices, Eulerian
//! walk, Hamiltonian shortcutting. Distance lookup is an injected capability
//! so apps can plug in a road-distance service, the haversine fallback, or a
//! deterministic fake in tests.

pub mod error;
pub mod traits;
pub mod waypoint;
pub mod graph;
pub mod mst;
pub mod matching;
pub mod euler;
pub mod shortcut;
pub mod optimizer;
pub mod google;
pub mod haversine;
