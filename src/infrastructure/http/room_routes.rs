//! Room API routes

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{Map, Value};

use crate::application::dto::SaveRoomRequestDto;
use crate::domain::entities::{Room, RoomData, RoomSummary};
use crate::domain::value_objects::RoomId;
use crate::infrastructure::http::auth::CurrentUser;
use crate::infrastructure::http::json_body::JsonBody;
use crate::infrastructure::http::service_error;
use crate::infrastructure::state::AppState;

pub(crate) fn parse_room_id(id: &str) -> Result<RoomId, (StatusCode, String)> {
    RoomId::parse(id).ok_or_else(|| (StatusCode::BAD_REQUEST, "Invalid room ID".to_string()))
}

/// Rooms owned by the caller
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<RoomSummary>>, (StatusCode, String)> {
    state
        .room_service
        .read_rooms(&user)
        .await
        .map(Json)
        .map_err(service_error)
}

/// Create a room, or update it when the body carries an id
pub async fn save_room(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    JsonBody(req): JsonBody<SaveRoomRequestDto>,
) -> Result<(StatusCode, Json<Room>), (StatusCode, String)> {
    let creating = req.id.is_none();
    let room = state
        .room_service
        .save_room(&user, req.into())
        .await
        .map_err(service_error)?;

    let status = if creating {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(room)))
}

pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Room>, (StatusCode, String)> {
    let room_id = parse_room_id(&id)?;
    state
        .room_service
        .read_room(room_id)
        .await
        .map(Json)
        .map_err(service_error)
}

/// Current live table data of a room
pub async fn get_room_data(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<RoomData>, (StatusCode, String)> {
    let room_id = parse_room_id(&id)?;
    state
        .room_data_service
        .read_room_data(room_id)
        .await
        .map_err(service_error)?
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("Room data {} not found", room_id)))
}

/// Replace the live table data of a room
pub async fn update_room_data(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path(id): Path<String>,
    JsonBody(data): JsonBody<Map<String, Value>>,
) -> Result<Json<RoomData>, (StatusCode, String)> {
    let room_id = parse_room_id(&id)?;
    state
        .room_data_service
        .update_room_data(&user, room_id, data)
        .await
        .map(Json)
        .map_err(service_error)
}
