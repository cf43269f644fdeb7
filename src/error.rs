use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RouteError {
    #[error("at least two waypoints are required, got {got}")]
    InsufficientInput { got: usize },
    #[error("waypoint {vertex} is unreachable from every other waypoint")]
    DisconnectedGraph { vertex: usize },
    #[error("algorithm invariant violated: {0}")]
    InvariantViolation(String),
}

pub type Result<T> = std::result::Result<T, RouteError>;
