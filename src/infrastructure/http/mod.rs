//! HTTP REST API routes

mod auth;
mod export_routes;
mod json_body;
mod room_routes;
mod scenario_routes;
mod script_routes;
mod user_routes;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::application::services::ServiceError;
use crate::infrastructure::state::AppState;
use crate::infrastructure::websocket;

pub(crate) use room_routes::parse_room_id;

/// Map a service failure to a status code; server-side failures are logged
pub(crate) fn service_error(e: ServiceError) -> (StatusCode, String) {
    let status = match &e {
        ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
        ServiceError::Forbidden(_) => StatusCode::FORBIDDEN,
        ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::Store(_) | ServiceError::Export(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(error = %e, "Request failed");
    }
    (status, e.to_string())
}

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // User routes
        .route("/api/users/session", post(user_routes::sign_in))
        // Room routes
        .route(
            "/api/rooms",
            get(room_routes::list_rooms).post(room_routes::save_room),
        )
        .route("/api/rooms/{id}", get(room_routes::get_room))
        .route(
            "/api/rooms/{id}/data",
            get(room_routes::get_room_data).put(room_routes::update_room_data),
        )
        .route(
            "/ws/rooms/{id}/data",
            get(websocket::room_data_ws_handler),
        )
        // Scenario routes
        .route(
            "/api/scenarios",
            get(scenario_routes::list_scenarios).post(scenario_routes::create_scenario),
        )
        .route("/api/scenarios/{id}", get(scenario_routes::get_scenario))
        // Script routes
        .route(
            "/api/scripts",
            get(script_routes::list_scripts).post(script_routes::save_script),
        )
        .route(
            "/api/scripts/{id}",
            get(script_routes::get_script).delete(script_routes::delete_script),
        )
        .route("/api/scripts/{id}/export", get(script_routes::export_script))
        // Export routes
        .route("/api/export/scenario", post(export_routes::export_scenario))
}
