use crate::handlers;
use crate::middleware;
use crate::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health::health_check))
        // Dashboard - Protected (require identity)
        .route(
            "/api/dashboard",
            get(handlers::dashboard::get_dashboard)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_identity)),
        )
        .route(
            "/api/dashboard/available",
            get(handlers::dashboard::get_available)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_identity)),
        )
        .route(
            "/api/dashboard/modules",
            post(handlers::dashboard::add_module)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_identity)),
        )
        .route(
            "/api/dashboard/modules/order",
            put(handlers::dashboard::reorder_modules)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_identity)),
        )
        .route(
            "/api/dashboard/modules/:module_id",
            delete(handlers::dashboard::remove_module)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_identity)),
        )
        .route(
            "/api/dashboard/preferences",
            put(handlers::dashboard::save_preferences)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_identity)),
        )
        // Ads surface - Protected (require identity)
        .route(
            "/api/ads/policy",
            get(handlers::ads::get_ad_policy)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_identity)),
        )
        // Catalog management - Protected (require platform admin)
        .route(
            "/api/admin/modules",
            get(handlers::catalog::list_modules)
                .post(handlers::catalog::create_module)
                .route_layer(from_fn_with_state(
                    state.clone(),
                    middleware::require_platform_admin,
                )),
        )
        .route(
            "/api/admin/modules/bulk",
            post(handlers::catalog::bulk_action).route_layer(from_fn_with_state(
                state.clone(),
                middleware::require_platform_admin,
            )),
        )
        .route(
            "/api/admin/modules/:id",
            get(handlers::catalog::get_module)
                .route_layer(from_fn_with_state(
                    state.clone(),
                    middleware::require_platform_admin,
                )),
        )
        .route(
            "/api/admin/modules/:id",
            patch(handlers::catalog::update_module).route_layer(from_fn_with_state(
                state.clone(),
                middleware::require_platform_admin,
            )),
        )
        .route(
            "/api/admin/modules/:id",
            delete(handlers::catalog::delete_module).route_layer(from_fn_with_state(
                state.clone(),
                middleware::require_platform_admin,
            )),
        )
        // Admin navigation surface
        .route(
            "/api/admin/navigation",
            get(handlers::catalog::admin_navigation).route_layer(from_fn_with_state(
                state.clone(),
                middleware::require_platform_admin,
            )),
        )
        .with_state(state)
}
