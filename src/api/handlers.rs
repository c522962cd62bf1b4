//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::state::{Preset, StoreState, TimerRecord};
use super::responses::{Envelope, HealthResponse, PingResponse};

/// Request body for POST /timer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetTimerRequest {
    #[serde(default)]
    pub title: String,
    pub target_time: Option<DateTime<Utc>>,
    pub is_active: bool,
}

/// Request body for POST /presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPresetRequest {
    pub title: String,
    pub duration_minutes: u32,
}

/// Handle GET /ping - connectivity probe
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse::pong())
}

/// Handle GET /timer - return the current timer record
pub async fn get_timer_handler(
    State(state): State<Arc<StoreState>>,
) -> Result<Json<Envelope<TimerRecord>>, StatusCode> {
    match state.get_timer() {
        Ok(record) => Ok(Json(Envelope::ok(record))),
        Err(e) => {
            error!("Failed to read timer record: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /timer - overwrite the timer record, echoing the applied
/// record with its fresh `updated_at` token
pub async fn set_timer_handler(
    State(state): State<Arc<StoreState>>,
    Json(request): Json<SetTimerRequest>,
) -> Result<Json<Envelope<TimerRecord>>, StatusCode> {
    match state.set_timer(request.title, request.target_time, request.is_active) {
        Ok(applied) => {
            info!("Timer endpoint called - record rewritten");
            Ok(Json(Envelope::ok(applied)))
        }
        Err(e) => {
            error!("Failed to write timer record: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /presets - return all presets (empty list is valid)
pub async fn get_presets_handler(
    State(state): State<Arc<StoreState>>,
) -> Result<Json<Envelope<Vec<Preset>>>, StatusCode> {
    match state.get_presets() {
        Ok(presets) => Ok(Json(Envelope::ok(presets))),
        Err(e) => {
            error!("Failed to read presets: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle POST /presets - create a preset with a store-assigned id
pub async fn add_preset_handler(
    State(state): State<Arc<StoreState>>,
    Json(request): Json<AddPresetRequest>,
) -> Result<Json<Envelope<Preset>>, StatusCode> {
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Ok(Json(Envelope::fail("Preset title is required".to_string())));
    }
    if request.duration_minutes == 0 {
        return Ok(Json(Envelope::fail(
            "Preset duration must be positive".to_string(),
        )));
    }

    match state.add_preset(title, request.duration_minutes) {
        Ok(preset) => Ok(Json(Envelope::ok(preset))),
        Err(e) => {
            error!("Failed to add preset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle DELETE /presets/:id - delete a preset by id
pub async fn delete_preset_handler(
    State(state): State<Arc<StoreState>>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<()>>, StatusCode> {
    match state.delete_preset(&id) {
        Ok(true) => Ok(Json(Envelope::ok_empty())),
        Ok(false) => Ok(Json(Envelope::fail("Preset not found".to_string()))),
        Err(e) => {
            error!("Failed to delete preset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /health - health check endpoint
pub async fn health_handler(State(state): State<Arc<StoreState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(state.get_uptime()))
}
