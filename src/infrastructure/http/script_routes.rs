//! Script API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
    Json,
};

use crate::application::dto::{DeleteScriptResponseDto, SaveScriptRequestDto};
use crate::domain::entities::{Script, ScriptSummary};
use crate::domain::value_objects::ScriptId;
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::export_routes::archive_response;
use crate::infrastructure::http::json_body::JsonBody;
use crate::infrastructure::http::service_error;
use crate::infrastructure::state::AppState;

fn parse_script_id(id: &str) -> Result<ScriptId, (StatusCode, String)> {
    ScriptId::parse(id).ok_or_else(|| (StatusCode::BAD_REQUEST, "Invalid script ID".to_string()))
}

pub async fn list_scripts(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<ScriptSummary>>, (StatusCode, String)> {
    state
        .script_service
        .read_script_names(&user)
        .await
        .map(Json)
        .map_err(service_error)
}

pub async fn save_script(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    JsonBody(req): JsonBody<SaveScriptRequestDto>,
) -> Result<(StatusCode, Json<Script>), (StatusCode, String)> {
    let creating = req.id.is_none();
    let script = state
        .script_service
        .save_script(&user, req.into())
        .await
        .map_err(service_error)?;

    let status = if creating {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(script)))
}

pub async fn get_script(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Script>, (StatusCode, String)> {
    let script_id = parse_script_id(&id)?;
    state
        .script_service
        .read_script(&user, script_id)
        .await
        .map(Json)
        .map_err(service_error)
}

pub async fn delete_script(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteScriptResponseDto>, (StatusCode, String)> {
    let script_id = parse_script_id(&id)?;
    let deleted = state.script_service.delete_script(&user, script_id).await;
    Ok(Json(DeleteScriptResponseDto { deleted }))
}

/// Download a stored script as a scenario archive
pub async fn export_script(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
) -> Result<Response, (StatusCode, String)> {
    let script_id = parse_script_id(&id)?;
    let archive = state
        .script_service
        .export_script(&user, script_id)
        .await
        .map_err(service_error)?;
    Ok(archive_response(archive))
}
