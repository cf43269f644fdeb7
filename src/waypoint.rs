//! Waypoint inputs for route optimization.

use serde::{Deserialize, Serialize};

/// A named stop with WGS84 coordinates.
///
/// Waypoints are immutable inputs: the optimizer reorders them but never
/// alters their fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Waypoint {
    pub fn new(name: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lng,
        }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}
