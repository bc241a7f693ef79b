//! Scenario API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::CreateScenarioRequestDto;
use crate::domain::entities::{Scenario, ScenarioSummary};
use crate::domain::value_objects::ScenarioId;
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::json_body::JsonBody;
use crate::infrastructure::http::service_error;
use crate::infrastructure::state::AppState;

pub async fn list_scenarios(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ScenarioSummary>>, (StatusCode, String)> {
    state
        .scenario_service
        .read_scenario_names(&user)
        .await
        .map(Json)
        .map_err(service_error)
}

pub async fn create_scenario(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    JsonBody(req): JsonBody<CreateScenarioRequestDto>,
) -> Result<(StatusCode, Json<Scenario>), (StatusCode, String)> {
    let scenario = state
        .scenario_service
        .add_scenario(&user, req.into())
        .await
        .map_err(service_error)?;
    Ok((StatusCode::CREATED, Json(scenario)))
}

pub async fn get_scenario(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Scenario>, (StatusCode, String)> {
    let scenario_id = ScenarioId::parse(&id)
        .ok_or_else(|| (StatusCode::BAD_REQUEST, "Invalid scenario ID".to_string()))?;
    state
        .scenario_service
        .read_scenario(scenario_id)
        .await
        .map(Json)
        .map_err(service_error)
}
