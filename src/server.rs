use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::config::ServerConfig;
use crate::reward;
use crate::types::{RewardBreakdown, TelemetrySnapshot};

pub type ApiError = (StatusCode, Json<Value>);

#[derive(Debug, Serialize, PartialEq)]
pub struct RewardOut {
    pub reward: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct BatchOut {
    pub rewards: Vec<f64>,
}

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<ServerConfig>,
}

pub fn router(cfg: ServerConfig) -> Router {
    let state = AppState { cfg: Arc::new(cfg) };
    Router::new()
        .route("/health", get(health))
        .route("/reward", post(score))
        .route("/reward/breakdown", post(score_breakdown))
        .route("/reward/batch", post(score_batch))
        .with_state(state)
}

fn unprocessable(msg: String) -> ApiError {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(json!({ "error": msg })))
}

fn eval_logged(state: &AppState, s: &TelemetrySnapshot) -> Result<RewardBreakdown, ApiError> {
    let b = reward::breakdown(s).map_err(|e| {
        tracing::warn!("rejecting snapshot: {}", e);
        unprocessable(e.to_string())
    })?;

    if state.cfg.log_rewards {
        tracing::info!(
            reward = b.total,
            guard = ?b.guard,
            track_direction = b.track_direction,
            direction_diff = b.direction_diff,
            direction_reward = b.direction_reward,
            speed_reward = b.speed_reward,
            steering_penalized = b.steering_penalized,
            progress_reward = b.progress_reward,
            "scored snapshot"
        );
    }
    Ok(b)
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn score(
    State(state): State<AppState>,
    Json(snapshot): Json<TelemetrySnapshot>,
) -> Result<Json<RewardOut>, ApiError> {
    let b = eval_logged(&state, &snapshot)?;
    Ok(Json(RewardOut { reward: b.total }))
}

pub async fn score_breakdown(
    State(state): State<AppState>,
    Json(snapshot): Json<TelemetrySnapshot>,
) -> Result<Json<RewardBreakdown>, ApiError> {
    eval_logged(&state, &snapshot).map(Json)
}

/// Scores a vector of snapshots in order; the first fault fails the batch.
pub async fn score_batch(
    State(state): State<AppState>,
    Json(snapshots): Json<Vec<TelemetrySnapshot>>,
) -> Result<Json<BatchOut>, ApiError> {
    let mut rewards = Vec::with_capacity(snapshots.len());
    for (i, s) in snapshots.iter().enumerate() {
        let r = reward::evaluate(s).map_err(|e| unprocessable(format!("snapshot {}: {}", i, e)))?;
        rewards.push(r);
    }

    if state.cfg.log_rewards {
        tracing::info!("batch scored n={}", rewards.len());
    }
    Ok(Json(BatchOut { rewards }))
}
