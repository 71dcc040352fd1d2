use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewardError {
    #[error("closest waypoint index {index} out of range for {len} waypoints")]
    WaypointIndex { index: usize, len: usize },

    #[error("invalid telemetry snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
