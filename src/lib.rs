//! Per-timestep reward for a DeepRacer-style RL agent, plus a small HTTP
//! service so an out-of-process training harness can call it.

pub mod config;
pub mod error;
pub mod reward;
pub mod server;
pub mod types;

pub use error::RewardError;
pub use reward::{breakdown, evaluate, reward_function};
pub use types::{Guard, RewardBreakdown, TelemetrySnapshot, Waypoint};
