//! Scenario export routes

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::application::dto::ExportScenarioRequestDto;
use crate::application::ports::outbound::SavedArchive;
use crate::application::services::{ScenarioExport, ServiceError};
use crate::infrastructure::http::json_body::JsonBody;
use crate::infrastructure::http::service_error;
use crate::infrastructure::state::AppState;

/// Send an archive as a file download
pub(crate) fn archive_response(archive: SavedArchive) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", archive.file_name);
    (
        [
            (header::CONTENT_TYPE, archive.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        archive.bytes,
    )
        .into_response()
}

/// Export character cards and the public note as `scenario.zip`
pub async fn export_scenario(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ExportScenarioRequestDto>,
) -> Result<Response, (StatusCode, String)> {
    let export = ScenarioExport::try_from(req)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    let archive = state
        .export_service
        .export_scenario(&export)
        .map_err(|e| service_error(ServiceError::Export(e)))?;
    Ok(archive_response(archive))
}
