use axum::{routing::get, routing::post, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::controllers::{health, AccessController, SearchController, ThemeController};
use crate::infrastructure::config::Config;
use crate::infrastructure::db::DbPool;

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    pool: Arc<DbPool>,
    config: Arc<Config>,
    access_controller: Arc<AccessController>,
    search_controller: Arc<SearchController>,
    theme_controller: Arc<ThemeController>,
) -> Result<(), Box<dyn std::error::Error>> {
    // Feature gate routes
    let access_routes = Router::new()
        .route(
            "/api/users/:userId/features/:feature",
            get(AccessController::check_feature),
        )
        .route(
            "/api/users/:userId/features/check",
            post(AccessController::check_features),
        )
        .with_state(access_controller);

    // Search routes
    let search_routes = Router::new()
        .route("/api/search", get(SearchController::search))
        .route("/api/search/spotlight", get(SearchController::spotlight))
        .route("/api/search/suggestions", get(SearchController::suggestions))
        .with_state(search_controller);

    // Theme routes
    let theme_routes = Router::new()
        .route("/api/users/:userId/themes", get(ThemeController::list_themes))
        .route(
            "/api/users/:userId/themes/:themeId/access",
            get(ThemeController::check_theme_access),
        )
        .route("/api/themes/validate", post(ThemeController::validate_theme))
        .with_state(theme_controller);

    // Build application routes
    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(pool.clone())
        .merge(access_routes)
        .merge(search_routes)
        .merge(theme_routes)
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
