//! Core capability boundary for the route optimizer.
//!
//! Distance lookup is intentionally an injected trait rather than a global
//! client, so the engine can be exercised with a deterministic in-memory
//! provider in tests.

/// Provides travel cost between two coordinates.
///
/// Implementations answer with a non-negative cost (road miles for the HTTP
/// adapter, great-circle miles for the haversine fallback) or `None` when no
/// route exists. The graph builder records a failed pair as an infinite edge
/// weight and continues; retry and backoff policy belongs to the provider,
/// not the engine.
pub trait DistanceProvider {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> Option<f64>;
}
