// Helix Dashboard API Server
// Main entry point for the dashboard module service REST API

mod config;
mod handlers;
mod middleware;
mod routes;

use config::Config;
use dotenvy::dotenv;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub struct AppState {
    pub catalog_service: helix_dashboard::CatalogService,
    pub preference_service: helix_dashboard::PreferenceService,
    pub registry: helix_dashboard::ComponentRegistry,
    pub verifier: middleware::IdentityVerifier,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,helix_api=debug,tower_http=debug".to_string()),
        )
        .init();

    tracing::info!("🚀 Starting Helix Dashboard API Server");
    tracing::info!("📦 Version: {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env();
    tracing::info!("🔌 Server: {}:{}", config.server_host, config.server_port);

    // Initialize database
    tracing::info!("🗄️  Connecting to database...");
    let database = helix_database::Database::new(config.database.clone())
        .await
        .expect("Failed to connect to database");
    database.ping().await.expect("Database ping failed");
    tracing::info!("✅ Database connected");

    // Create catalog service
    let catalog_service = helix_dashboard::CatalogService::new(database.clone());
    tracing::info!("📚 Catalog service initialized");

    // Create preference service
    let preference_service = helix_dashboard::PreferenceService::new(database.clone());
    tracing::info!("🗂️  Preference service initialized");

    // Build the component registry
    let registry = helix_dashboard::ComponentRegistry::with_defaults();
    tracing::info!("🧩 Component registry built");

    // Identity verifier for the session tokens issued by the auth layer
    let verifier = middleware::IdentityVerifier::new(&config.jwt_secret);
    tracing::info!("🔐 Identity verifier initialized");

    // Create app state
    let state = Arc::new(AppState {
        catalog_service,
        preference_service,
        registry,
        verifier,
    });

    // Create router
    let app = routes::create_router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    tracing::info!("📡 Routes configured:");
    tracing::info!("   GET  /health");
    tracing::info!("   GET  /api/dashboard");
    tracing::info!("   GET  /api/dashboard/available");
    tracing::info!("   POST /api/dashboard/modules");
    tracing::info!("   GET  /api/ads/policy");
    tracing::info!("   GET  /api/admin/modules");

    // Start server
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("✅ Server ready at http://{}", addr);

    axum::serve(listener, app).await.expect("Server error");

    Ok(())
}
