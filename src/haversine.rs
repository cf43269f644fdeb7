//! Haversine distance provider (fallback when no road-distance service is
//! configured).
//!
//! Uses great-circle distance. Less accurate than a road matrix (ignores
//! roads) but always available, and it satisfies the triangle inequality
//! exactly, which the tour heuristic's quality bound relies on.

use crate::traits::DistanceProvider;

/// Earth radius in miles.
const EARTH_RADIUS_MI: f64 = 3958.8;

/// Great-circle mileage provider.
#[derive(Debug, Clone, Default)]
pub struct HaversineProvider;

impl HaversineProvider {
    /// Haversine distance between two points in miles.
    fn haversine_mi(from: (f64, f64), to: (f64, f64)) -> f64 {
        let (lat1, lng1) = from;
        let (lat2, lng2) = to;

        let lat1_rad = lat1.to_radians();
        let lat2_rad = lat2.to_radians();
        let delta_lat = (lat2 - lat1).to_radians();
        let delta_lng = (lng2 - lng1).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_MI * c
    }
}

impl DistanceProvider for HaversineProvider {
    fn distance(&self, from: (f64, f64), to: (f64, f64)) -> Option<f64> {
        Some(Self::haversine_mi(from, to))
    }
}
