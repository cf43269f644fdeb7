//! Test fixtures for route-optimizer.
//!
//! Provides real New York City landmark coordinates for realistic
//! end-to-end routing tests.

pub mod landmarks;

pub use landmarks::*;
