//! Real New York City landmarks for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. Spread between Lower Manhattan
//! and the Upper East Side so a bad visiting order is measurably worse than
//! a good one.

use route_optimizer::waypoint::Waypoint;

/// A named landmark with coordinates.
#[derive(Debug, Clone)]
pub struct Landmark {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Landmark {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn waypoint(&self) -> Waypoint {
        Waypoint::new(self.name, self.lat, self.lng)
    }
}

// ============================================================================
// Manhattan sights, deliberately listed in a zigzag order that alternates
// between downtown and uptown
// ============================================================================

pub const MANHATTAN_ZIGZAG: &[Landmark] = &[
    Landmark::new("Statue of Liberty", 40.689247, -74.044502),
    Landmark::new("Metropolitan Museum", 40.779437, -73.963244),
    Landmark::new("Brooklyn Bridge", 40.706086, -73.996864),
    Landmark::new("Central Park Zoo", 40.767778, -73.971806),
    Landmark::new("One World Trade Center", 40.712742, -74.013382),
    Landmark::new("Times Square", 40.758896, -73.985130),
    Landmark::new("The High Line", 40.747992, -74.004765),
    Landmark::new("Grand Central Terminal", 40.752726, -73.977229),
    Landmark::new("Empire State Building", 40.748817, -73.985428),
    Landmark::new("Rockefeller Center", 40.758740, -73.978674),
];

pub fn manhattan_waypoints() -> Vec<Waypoint> {
    MANHATTAN_ZIGZAG.iter().map(Landmark::waypoint).collect()
}
