use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reelboard_backend::infrastructure::config::{Config, LogFormat};
use reelboard_backend::infrastructure::db::{check_connection, create_pool};
use reelboard_backend::infrastructure::http::start_http_server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Reelboard Backend on {}:{}",
        config.host,
        config.port
    );

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;
    tracing::info!("Database connection pool created");

    // Verify database connection
    check_connection(&pool).await?;
    tracing::info!("Database connection verified");

    let pool = Arc::new(pool);
    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (inject db pool)
    tracing::info!("Instantiating repositories...");
    let user_repo = Arc::new(
        reelboard_backend::infrastructure::repositories::UserRepository::new(pool.clone()),
    );
    let usage_store: Arc<dyn reelboard_backend::infrastructure::repositories::UsageStore> =
        Arc::new(reelboard_backend::infrastructure::repositories::PgUsageStore::new(pool.clone()));
    let profile_store: Arc<dyn reelboard_backend::infrastructure::repositories::ProfileStore> =
        Arc::new(reelboard_backend::infrastructure::repositories::PgProfileStore::new(
            pool.clone(),
        ));

    // 2. Instantiate services (inject stores)
    tracing::info!("Instantiating services...");
    let usage_counter = reelboard_backend::domain::usage::UsageCounter::new(usage_store);
    let access_service = Arc::new(reelboard_backend::domain::access::AccessService::new(
        usage_counter,
    ));
    let search_service = Arc::new(reelboard_backend::domain::search::SearchService::new(
        profile_store,
    ));
    let theme_service = Arc::new(reelboard_backend::domain::theme::ThemeService::new());

    // 3. Instantiate controllers (inject services)
    tracing::info!("Instantiating controllers...");
    let access_controller = Arc::new(reelboard_backend::controllers::AccessController::new(
        access_service,
        user_repo.clone(),
    ));
    let search_controller = Arc::new(reelboard_backend::controllers::SearchController::new(
        search_service,
    ));
    let theme_controller = Arc::new(reelboard_backend::controllers::ThemeController::new(
        theme_service,
        user_repo.clone(),
    ));

    // Start HTTP server with all routes
    start_http_server(
        pool,
        config,
        access_controller,
        search_controller,
        theme_controller,
    )
    .await?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "reelboard_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "reelboard_backend=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
