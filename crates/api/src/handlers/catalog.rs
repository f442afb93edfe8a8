use crate::handlers::{error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use helix_models::{
    BulkModuleAction, Module, ModuleCategory, ModuleFilter, NewModule, UpdateModule,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct BulkActionResponse {
    pub affected: u64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// List catalog modules with optional filters
/// GET /api/admin/modules
pub async fn list_modules(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<ModuleFilter>,
) -> Result<Json<Vec<Module>>, (StatusCode, Json<ErrorResponse>)> {
    let modules = state
        .catalog_service
        .list(&filter)
        .await
        .map_err(error_response)?;

    Ok(Json(modules))
}

/// Create a catalog module
/// POST /api/admin/modules
pub async fn create_module(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewModule>,
) -> Result<Json<Module>, (StatusCode, Json<ErrorResponse>)> {
    let module = state
        .catalog_service
        .create(request)
        .await
        .map_err(error_response)?;

    Ok(Json(module))
}

/// Fetch a catalog module
/// GET /api/admin/modules/:id
pub async fn get_module(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Module>, (StatusCode, Json<ErrorResponse>)> {
    let module = state.catalog_service.get(&id).await.map_err(error_response)?;

    Ok(Json(module))
}

/// Partially update a catalog module
/// PATCH /api/admin/modules/:id
pub async fn update_module(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateModule>,
) -> Result<Json<Module>, (StatusCode, Json<ErrorResponse>)> {
    let module = state
        .catalog_service
        .update(&id, request)
        .await
        .map_err(error_response)?;

    Ok(Json(module))
}

/// Delete a catalog module (core modules are protected)
/// DELETE /api/admin/modules/:id
pub async fn delete_module(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, (StatusCode, Json<ErrorResponse>)> {
    state
        .catalog_service
        .delete(&id)
        .await
        .map_err(error_response)?;

    Ok(Json(MessageResponse {
        message: format!("Module {} deleted", id),
    }))
}

/// Bulk enable/disable/delete. Core modules are silently excluded; the
/// response reports only the affected count.
/// POST /api/admin/modules/bulk
pub async fn bulk_action(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BulkModuleAction>,
) -> Result<Json<BulkActionResponse>, (StatusCode, Json<ErrorResponse>)> {
    let affected = state
        .catalog_service
        .bulk(&request)
        .await
        .map_err(error_response)?;

    Ok(Json(BulkActionResponse { affected }))
}

/// Admin navigation surface: enabled admin-category modules. These never
/// appear in the user customizer.
/// GET /api/admin/navigation
pub async fn admin_navigation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Module>>, (StatusCode, Json<ErrorResponse>)> {
    let filter = ModuleFilter {
        search: None,
        category: Some(ModuleCategory::Admin),
        enabled_only: true,
    };

    let modules = state
        .catalog_service
        .list(&filter)
        .await
        .map_err(error_response)?;

    Ok(Json(modules))
}
