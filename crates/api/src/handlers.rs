pub mod ads;
pub mod catalog;
pub mod dashboard;
pub mod health;

use axum::{http::StatusCode, Json};
use helix_dashboard::DashboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: &str, message: &str) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Map a domain error to its HTTP representation
pub fn error_response(err: DashboardError) -> (StatusCode, Json<ErrorResponse>) {
    let (status, code) = match &err {
        DashboardError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
        DashboardError::DuplicateId(_) => (StatusCode::CONFLICT, "duplicate_module_id"),
        DashboardError::CoreModuleProtected(_) => (StatusCode::FORBIDDEN, "core_module_protected"),
        DashboardError::ProtectedModule(_) => (StatusCode::FORBIDDEN, "protected_module"),
        DashboardError::AlreadyPresent(_) => (StatusCode::CONFLICT, "module_already_present"),
        DashboardError::ValidationError(_) => (StatusCode::BAD_REQUEST, "validation_error"),
        DashboardError::Database(e) => {
            tracing::error!("Database error: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("internal_error", "Database error")),
            );
        }
    };

    (status, Json(ErrorResponse::new(code, &err.to_string())))
}
