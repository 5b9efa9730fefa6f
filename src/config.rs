// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// GraphQL endpoint serving `wpPages` and `appSettings`.
    pub cms_graphql_url: String,
    /// Raw JSON object mapping custom-domain aliases to lookup keys.
    /// Parsed per request; a malformed value is logged and ignored.
    pub custom_domains: Option<String>,
    pub bind_addr: String,
    pub cms_timeout_secs: u64,
    pub sanitize_cache_capacity: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let cms_graphql_url = env::var("CMS_GRAPHQL_URL")
            .expect("CMS_GRAPHQL_URL must be set");

        let custom_domains = env::var("CUSTOM_DOMAINS")
            .ok()
            .filter(|raw| !raw.trim().is_empty());

        let bind_addr = env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let cms_timeout_secs = env::var("CMS_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let sanitize_cache_capacity = env::var("SANITIZE_CACHE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            cms_graphql_url,
            custom_domains,
            bind_addr,
            cms_timeout_secs,
            sanitize_cache_capacity,
            rust_log,
        }
    }
}
