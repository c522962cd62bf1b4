//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures
//! for the backing store.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::StoreState;
use handlers::*;

/// Create the HTTP router with all store endpoints
pub fn create_router(state: Arc<StoreState>) -> Router {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/timer", get(get_timer_handler))
        .route("/timer", post(set_timer_handler))
        .route("/presets", get(get_presets_handler))
        .route("/presets", post(add_preset_handler))
        .route("/presets/:id", delete(delete_preset_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
