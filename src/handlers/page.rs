// src/handlers/page.rs

use axum::{
    extract::{Path, State},
    response::Html,
};

use crate::{
    error::AppError,
    resolver::{RouteParams, resolve_lookup_key},
    state::AppState,
    view::{self, FetchState},
};

/// Renders the page stored under `slug`.
pub async fn get_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Html<String>, AppError> {
    render_page(
        &state,
        RouteParams {
            slug,
            customdomainslug: None,
        },
    )
    .await
}

/// Renders the page stored under `slug`, looked up through the custom domain
/// that `customdomainslug` is configured to alias.
pub async fn get_custom_domain_page(
    State(state): State<AppState>,
    Path((customdomainslug, slug)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    render_page(
        &state,
        RouteParams {
            slug,
            customdomainslug: Some(customdomainslug),
        },
    )
    .await
}

/// One page fetch and one settings fetch, run concurrently. No retries:
/// a failed page fetch is reported as-is, a failed settings fetch only
/// costs the title suffix.
async fn render_page(state: &AppState, params: RouteParams) -> Result<Html<String>, AppError> {
    let key = resolve_lookup_key(&params, state.config.custom_domains.as_deref());

    let (pages, settings) = tokio::join!(state.cms.fetch_pages(&key), state.cms.fetch_settings());

    let page = pages
        .map_err(|e| {
            tracing::error!("Failed to fetch page {:?}: {}", key, e);
            e
        })?
        .into_iter()
        .next()
        .ok_or(AppError::NotFound)?;

    let settings = match settings {
        Ok(settings) => FetchState::Ready(settings),
        Err(e) => FetchState::Failed(e.to_string()),
    };

    Ok(Html(view::render_document(
        FetchState::Ready(Some(page)),
        settings,
        &state.sanitizer,
    )))
}
