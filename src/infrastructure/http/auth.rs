//! Request identity
//!
//! Authentication happens in front of the engine; the provider's uid arrives
//! in the `x-user-uid` header and is trusted as-is.

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::request::Parts, http::StatusCode};

use crate::domain::entities::User;
use crate::infrastructure::http::service_error;
use crate::infrastructure::state::AppState;

pub const USER_UID_HEADER: &str = "x-user-uid";

/// Provider uid of the caller, who may not be registered yet
pub struct ProviderUid(pub String);

impl<S> FromRequestParts<S> for ProviderUid
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, String);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_UID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|uid| !uid.is_empty())
            .map(|uid| ProviderUid(uid.to_string()))
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    format!("Missing {} header", USER_UID_HEADER),
                )
            })
    }
}

/// Registered user making the request
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = (StatusCode, String);

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let ProviderUid(uid) = ProviderUid::from_request_parts(parts, state).await?;
        match state.user_service.find_by_uid(&uid).await {
            Ok(Some(user)) => Ok(CurrentUser(user)),
            Ok(None) => Err((
                StatusCode::UNAUTHORIZED,
                "Unknown user, sign in first".to_string(),
            )),
            Err(e) => Err(service_error(e)),
        }
    }
}
