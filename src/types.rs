use serde::{Deserialize, Serialize};

use crate::error::RewardError;

/// Centerline point, sent by the simulator as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Waypoint(pub f64, pub f64);

/// One timestep of simulator state. Every field is required; any extra keys
/// the simulator sends (x, y, steps, is_left_of_center, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub track_width: f64,
    pub distance_from_center: f64,
    pub speed: f64,
    pub steering_angle: f64, // degrees, signed
    pub all_wheels_on_track: bool,
    pub progress: f64, // percent, 0..=100
    pub waypoints: Vec<Waypoint>,
    pub closest_waypoints: [usize; 2], // [behind, ahead]
    pub heading: f64, // degrees
}

impl TelemetrySnapshot {
    pub fn waypoint(&self, index: usize) -> Result<Waypoint, RewardError> {
        self.waypoints
            .get(index)
            .copied()
            .ok_or(RewardError::WaypointIndex {
                index,
                len: self.waypoints.len(),
            })
    }
}

/// Which floor guard short-circuited the evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Guard {
    OffTrack,
    OffCenter,
}

/// Every intermediate term of one evaluation. `total` is the reward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guard: Option<Guard>,
    pub track_direction: f64,
    pub direction_diff: f64,
    pub direction_reward: f64,
    pub speed_reward: f64,
    pub steering_penalized: bool,
    pub progress_reward: f64,
    pub total: f64,
}

impl RewardBreakdown {
    pub(crate) fn floor(guard: Guard, total: f64) -> Self {
        Self {
            guard: Some(guard),
            track_direction: 0.0,
            direction_diff: 0.0,
            direction_reward: 0.0,
            speed_reward: 0.0,
            steering_penalized: false,
            progress_reward: 0.0,
            total,
        }
    }
}
