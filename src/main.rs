// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use dotenvy::dotenv;
use storefront_page::client::GraphQlCms;
use storefront_page::config::Config;
use storefront_page::routes;
use storefront_page::state::AppState;
use storefront_page::utils::memo::Sanitizer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    let cms = GraphQlCms::new(
        &config.cms_graphql_url,
        Duration::from_secs(config.cms_timeout_secs),
    )
    .expect("Failed to build CMS client");
    tracing::info!("Using CMS at {}", config.cms_graphql_url);

    if config.custom_domains.is_some() {
        tracing::info!("Custom domain aliases configured");
    }

    // Create AppState
    let state = AppState {
        sanitizer: Arc::new(Sanitizer::new(config.sanitize_cache_capacity)),
        cms: Arc::new(cms),
        config: config.clone(),
    };

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind listening address");
    tracing::info!("Listening on {}", config.bind_addr);

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
