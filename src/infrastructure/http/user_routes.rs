//! User API routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::application::dto::{SessionResponseDto, SignInRequestDto};
use crate::infrastructure::http::auth::ProviderUid;
use crate::infrastructure::http::json_body::JsonBody;
use crate::infrastructure::http::service_error;
use crate::infrastructure::state::AppState;

/// Register on first sign-in and make sure the user has a room
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    ProviderUid(uid): ProviderUid,
    JsonBody(req): JsonBody<SignInRequestDto>,
) -> Result<Json<SessionResponseDto>, (StatusCode, String)> {
    let user = state
        .user_service
        .sign_in(req.into_request(uid))
        .await
        .map_err(service_error)?;
    let rooms = state
        .room_service
        .ensure_default_room(&user)
        .await
        .map_err(service_error)?;

    Ok(Json(SessionResponseDto {
        user: user.into(),
        rooms,
    }))
}
