use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ServerConfig;
use crate::handlers::{global_search, health, ingest_log, search, AppState};
use crate::middleware::default_json_content_type;
use crate::openapi::ApiDoc;
use logquery::{ElasticsearchStore, LogStore};

/// Routes and layers for the log service, independent of how the store is built.
pub fn build_router(state: Arc<AppState>, config: &ServerConfig) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/logs", post(ingest_log))
        .route("/search", post(search))
        .route("/globalSearch", post(global_search))
        .with_state(state);

    let swagger = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());

    let app = Router::new().merge(api).merge(swagger);

    let app = match &config.ui_dir {
        Some(dir) if dir.exists() => {
            tracing::info!("Serving UI from {:?}", dir);
            app.fallback_service(
                ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
            )
        }
        Some(dir) => {
            tracing::warn!("UI directory not found at {:?}, skipping", dir);
            app
        }
        None => app,
    };

    app.layer(DefaultBodyLimit::max(config.max_body_mb * 1024 * 1024))
        .layer(middleware::from_fn(default_json_content_type))
        .layer(CorsLayer::very_permissive().max_age(std::time::Duration::from_secs(86400)))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // One client for the whole process; reqwest pools connections internally.
    let store: Arc<dyn LogStore> = Arc::new(ElasticsearchStore::new(
        config.elasticsearch_node.clone(),
        config.store_timeout,
    )?);
    tracing::info!(
        node = %config.elasticsearch_node,
        timeout_secs = config.store_timeout.as_secs(),
        "Log store configured"
    );

    let state = Arc::new(AppState::new(store));
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Log service listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Log service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
