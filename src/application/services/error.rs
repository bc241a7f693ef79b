use crate::application::ports::outbound::StoreError;
use crate::application::services::ExportError;

/// Errors surfaced by the management services
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("Access denied: {0}")]
    Forbidden(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

/// Shared name validation for rooms, scenarios and scripts
pub(crate) fn validate_name(kind: &str, name: &str) -> ServiceResult<()> {
    if name.trim().is_empty() {
        return Err(ServiceError::InvalidInput(format!("{kind} name cannot be empty")));
    }
    if name.chars().count() > 255 {
        return Err(ServiceError::InvalidInput(format!(
            "{kind} name cannot exceed 255 characters"
        )));
    }
    Ok(())
}

/// Fields owned by the engine; editor payloads may not override them
pub(crate) const RESERVED_FIELDS: [&str; 7] = [
    "id",
    "name",
    "uid",
    "createUserId",
    "createdAt",
    "updatedAt",
    "scriptId",
];

pub(crate) fn strip_reserved(
    mut body: serde_json::Map<String, serde_json::Value>,
) -> serde_json::Map<String, serde_json::Value> {
    for key in RESERVED_FIELDS {
        body.remove(key);
    }
    body
}
