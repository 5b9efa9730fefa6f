// src/client.rs

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::json;
use thiserror::Error;
use url::Url;

use crate::{
    models::{
        page::{Page, PagesData},
        settings::{Settings, SettingsData},
    },
    resolver::LookupKey,
};

/// Failures talking to the CMS. The `Display` text is shown to visitors
/// verbatim, so it stays short and human-readable.
#[derive(Debug, Error)]
pub enum CmsError {
    #[error("Invalid CMS endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("GraphQL error: {0}")]
    GraphQl(String),

    #[error("Network error: response carried no data")]
    EmptyResponse,
}

/// The two upstream fetches a page render depends on.
#[async_trait]
pub trait CmsClient: Send + Sync {
    /// Pages matching `key`. Zero or one page is expected.
    async fn fetch_pages(&self, key: &LookupKey) -> Result<Vec<Page>, CmsError>;

    async fn fetch_settings(&self) -> Result<Settings, CmsError>;
}

const PAGE_BY_SLUG_QUERY: &str = r#"
query SinglePageBySlug($slug: String, $customDomain: String) {
  wpPages(slug: $slug, customDomain: $customDomain) {
    pages {
      date
      title { rendered }
      content { rendered }
      excerpt { rendered }
      author { name }
      featured_media { media_type source_url alt_text caption { rendered } }
    }
  }
}
"#;

const SETTINGS_QUERY: &str = r#"
query Settings {
  appSettings { titleTag }
}
"#;

#[derive(Debug, Deserialize)]
struct GraphQlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphQlErrorMessage>,
}

#[derive(Debug, Deserialize)]
struct GraphQlErrorMessage {
    message: String,
}

/// `CmsClient` over GraphQL-on-HTTP.
#[derive(Debug, Clone)]
pub struct GraphQlCms {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphQlCms {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, CmsError> {
        let endpoint = Url::parse(endpoint)?;
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { http, endpoint })
    }

    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: serde_json::Value,
    ) -> Result<T, CmsError> {
        let response: GraphQlResponse<T> = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if !response.errors.is_empty() {
            let message = response
                .errors
                .into_iter()
                .map(|e| e.message)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(CmsError::GraphQl(message));
        }

        response.data.ok_or(CmsError::EmptyResponse)
    }
}

#[async_trait]
impl CmsClient for GraphQlCms {
    async fn fetch_pages(&self, key: &LookupKey) -> Result<Vec<Page>, CmsError> {
        tracing::debug!(slug = %key.slug, custom_domain = ?key.custom_domain, "Fetching page");
        let data: PagesData = self
            .query(
                PAGE_BY_SLUG_QUERY,
                json!({ "slug": key.slug, "customDomain": key.custom_domain }),
            )
            .await?;
        Ok(data.into_pages())
    }

    async fn fetch_settings(&self) -> Result<Settings, CmsError> {
        let data: SettingsData = self.query(SETTINGS_QUERY, json!({})).await?;
        Ok(data.app_settings.unwrap_or_default())
    }
}
