use crate::error::RewardError;
use crate::types::{Guard, RewardBreakdown, TelemetrySnapshot};

/// Returned as-is whenever a guard trips.
pub const FLOOR_REWARD: f64 = 1e-3;
/// Max distance from center, as a fraction of track width.
pub const CENTER_LIMIT_RATIO: f64 = 0.5;
/// Heading error (degrees) at which the alignment factor reaches zero.
pub const DIRECTION_FALLOFF_DEG: f64 = 30.0;
pub const ABS_STEERING_THRESHOLD: f64 = 15.0;
pub const STEERING_PENALTY: f64 = 0.8;

const BASE_REWARD: f64 = 1.0;

/// Scalar reward for one timestep.
pub fn evaluate(s: &TelemetrySnapshot) -> Result<f64, RewardError> {
    breakdown(s).map(|b| b.total)
}

/// Parse a JSON snapshot and score it.
pub fn reward_function(params: &str) -> Result<f64, RewardError> {
    let snapshot: TelemetrySnapshot = serde_json::from_str(params)?;
    evaluate(&snapshot)
}

/// Runs the full evaluation and keeps every intermediate term.
///
/// Order matters: the alignment factor gates only the base term, speed is
/// added afterwards, the steering penalty scales base+speed, and progress is
/// added last.
pub fn breakdown(s: &TelemetrySnapshot) -> Result<RewardBreakdown, RewardError> {
    if !s.all_wheels_on_track {
        return Ok(RewardBreakdown::floor(Guard::OffTrack, FLOOR_REWARD));
    }
    if s.distance_from_center > s.track_width * CENTER_LIMIT_RATIO {
        return Ok(RewardBreakdown::floor(Guard::OffCenter, FLOOR_REWARD));
    }

    let mut reward = BASE_REWARD;

    let [behind, ahead] = s.closest_waypoints;
    let next = s.waypoint(ahead)?;
    let prev = s.waypoint(behind)?;
    // atan2(0, 0) == 0 for coincident waypoints
    let track_direction = (next.1 - prev.1).atan2(next.0 - prev.0).to_degrees();

    // No wrap into [0, 180]: headings either side of +/-180 score as misaligned.
    let direction_diff = (track_direction - s.heading).abs();
    let direction_reward = max_or_first(1.0 - direction_diff / DIRECTION_FALLOFF_DEG, 0.0);
    reward *= direction_reward;

    let speed_reward = s.speed * s.speed;
    reward += speed_reward;

    let steering_penalized = s.steering_angle.abs() > ABS_STEERING_THRESHOLD;
    if steering_penalized {
        reward *= STEERING_PENALTY;
    }

    let progress_reward = s.progress / 100.0;
    reward += progress_reward;

    Ok(RewardBreakdown {
        guard: None,
        track_direction,
        direction_diff,
        direction_reward,
        speed_reward,
        steering_penalized,
        progress_reward,
        total: reward,
    })
}

/// `a` unless `b` is strictly greater, so a NaN `a` passes through.
fn max_or_first(a: f64, b: f64) -> f64 {
    if b > a {
        b
    } else {
        a
    }
}
