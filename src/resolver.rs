// src/resolver.rs

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Route parameters of a page request.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteParams {
    pub slug: String,
    pub customdomainslug: Option<String>,
}

/// Key handed to the CMS page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupKey {
    pub slug: String,
    pub custom_domain: Option<String>,
}

#[derive(Debug, Error)]
#[error("invalid custom domain configuration: {0}")]
pub struct CustomDomainError(#[from] serde_json::Error);

/// Alias -> custom domain mapping, configured as a JSON object of strings,
/// e.g. `{"outlet":"outlet.example.com"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CustomDomains(HashMap<String, String>);

impl CustomDomains {
    /// Parses the raw configuration string.
    ///
    /// An empty or blank string means "not configured" and yields `Ok(None)`.
    pub fn parse(raw: &str) -> Result<Option<Self>, CustomDomainError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(raw)?))
    }

    pub fn get(&self, alias: &str) -> Option<&str> {
        self.0.get(alias).map(String::as_str)
    }
}

/// Computes the lookup key for `slug`, mapping `alias` through an already
/// parsed configuration. An alias missing from the mapping resolves to no
/// custom domain.
pub fn lookup_key(slug: &str, alias: Option<&str>, domains: Option<&CustomDomains>) -> LookupKey {
    let custom_domain = match (alias, domains) {
        (Some(alias), Some(domains)) => domains.get(alias).map(str::to_owned),
        _ => None,
    };

    LookupKey {
        slug: slug.to_owned(),
        custom_domain,
    }
}

/// Resolves route parameters against the raw `CUSTOM_DOMAINS` setting.
///
/// A malformed setting is logged and treated as absent; it never fails the
/// request.
pub fn resolve_lookup_key(params: &RouteParams, raw_custom_domains: Option<&str>) -> LookupKey {
    let domains = match raw_custom_domains.map(CustomDomains::parse).transpose() {
        Ok(parsed) => parsed.flatten(),
        Err(e) => {
            tracing::error!("Ignoring custom domains: {}", e);
            None
        }
    };

    lookup_key(
        &params.slug,
        params.customdomainslug.as_deref(),
        domains.as_ref(),
    )
}
