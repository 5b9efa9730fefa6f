// src/routes.rs

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::{handlers::page, state::AppState};

/// Assembles the main application router.
///
/// * `/pages/{slug}` renders a page by slug.
/// * `/domains/{customdomainslug}/pages/{slug}` renders it through a custom domain alias.
/// * Applies global request tracing.
pub fn create_router(state: AppState) -> Router {
    let page_routes = Router::new().route("/{slug}", get(page::get_page));

    let domain_routes =
        Router::new().route("/{customdomainslug}/pages/{slug}", get(page::get_custom_domain_page));

    Router::new()
        .nest("/pages", page_routes)
        .nest("/domains", domain_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
