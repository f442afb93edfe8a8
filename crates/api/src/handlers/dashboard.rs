use crate::handlers::{error_response, ErrorResponse};
use crate::AppState;
use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};
use helix_dashboard::{available_modules, compose, ComponentBinding};
use helix_models::{Identity, Module, ModuleCategory, ModuleFilter, UserModulePreference};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct DashboardModule {
    pub id: String,
    pub name: String,
    pub category: ModuleCategory,
    pub component: String,
    pub implicit: bool,
    pub binding: ComponentBinding,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub modules: Vec<DashboardModule>,
}

#[derive(Debug, Serialize)]
pub struct AvailableModule {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: ModuleCategory,
}

impl From<&Module> for AvailableModule {
    fn from(module: &Module) -> Self {
        Self {
            id: module.id.clone(),
            name: module.name.clone(),
            description: module.description.clone(),
            category: module.category,
        }
    }
}

/// Legacy wire shape: two independent fields, order-significant
#[derive(Debug, Serialize)]
pub struct PreferenceResponse {
    pub modules: Vec<String>,
    #[serde(rename = "moduleOrder")]
    pub module_order: Vec<String>,
}

impl From<UserModulePreference> for PreferenceResponse {
    fn from(preference: UserModulePreference) -> Self {
        Self {
            modules: preference.modules,
            module_order: preference.module_order,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddModuleRequest {
    pub module_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    #[serde(rename = "moduleOrder", alias = "module_order")]
    pub module_order: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SavePreferencesRequest {
    pub modules: Vec<String>,
    #[serde(rename = "moduleOrder", alias = "module_order")]
    pub module_order: Vec<String>,
}

async fn load_catalog(
    state: &AppState,
) -> Result<Vec<Module>, (StatusCode, Json<ErrorResponse>)> {
    state
        .catalog_service
        .list(&ModuleFilter::default())
        .await
        .map_err(error_response)
}

/// Compose the caller's dashboard
/// GET /api/dashboard
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<DashboardResponse>, (StatusCode, Json<ErrorResponse>)> {
    let catalog = load_catalog(&state).await?;
    let (modules, module_order) = state
        .preference_service
        .get(&identity)
        .await
        .map_err(error_response)?;

    let composed = compose(&identity, &catalog, &modules, &module_order);

    let modules = composed
        .into_iter()
        .map(|m| DashboardModule {
            binding: state.registry.resolve(&m.id),
            id: m.id,
            name: m.name,
            category: m.category,
            component: m.component,
            implicit: m.implicit,
        })
        .collect();

    Ok(Json(DashboardResponse { modules }))
}

/// Modules the caller can still add in the customizer
/// GET /api/dashboard/available
pub async fn get_available(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
) -> Result<Json<Vec<AvailableModule>>, (StatusCode, Json<ErrorResponse>)> {
    let catalog = load_catalog(&state).await?;
    let (modules, module_order) = state
        .preference_service
        .get(&identity)
        .await
        .map_err(error_response)?;

    let available = available_modules(&identity, &catalog, &modules, &module_order)
        .into_iter()
        .map(AvailableModule::from)
        .collect();

    Ok(Json(available))
}

/// Add a module to the caller's dashboard
/// POST /api/dashboard/modules
pub async fn add_module(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<AddModuleRequest>,
) -> Result<Json<PreferenceResponse>, (StatusCode, Json<ErrorResponse>)> {
    let preference = state
        .preference_service
        .add_module(&identity, &request.module_id)
        .await
        .map_err(error_response)?;

    Ok(Json(preference.into()))
}

/// Remove a module from the caller's dashboard
/// DELETE /api/dashboard/modules/:module_id
pub async fn remove_module(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Path(module_id): Path<String>,
) -> Result<Json<PreferenceResponse>, (StatusCode, Json<ErrorResponse>)> {
    let preference = state
        .preference_service
        .remove_module(&identity, &module_id)
        .await
        .map_err(error_response)?;

    Ok(Json(preference.into()))
}

/// Replace the caller's module order
/// PUT /api/dashboard/modules/order
pub async fn reorder_modules(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<ReorderRequest>,
) -> Result<Json<PreferenceResponse>, (StatusCode, Json<ErrorResponse>)> {
    let preference = state
        .preference_service
        .reorder(&identity, request.module_order)
        .await
        .map_err(error_response)?;

    Ok(Json(preference.into()))
}

/// Save the stored preference verbatim (legacy dual shape)
/// PUT /api/dashboard/preferences
pub async fn save_preferences(
    State(state): State<Arc<AppState>>,
    Extension(identity): Extension<Identity>,
    Json(request): Json<SavePreferencesRequest>,
) -> Result<Json<PreferenceResponse>, (StatusCode, Json<ErrorResponse>)> {
    let preference = state
        .preference_service
        .save(&identity, request.modules, request.module_order)
        .await
        .map_err(error_response)?;

    Ok(Json(preference.into()))
}
