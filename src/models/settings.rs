// src/models/settings.rs

use serde::{Deserialize, Serialize};

/// Storefront-wide settings relevant to page rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Suffix appended to every document title, e.g. "My Store".
    #[serde(default)]
    pub title_tag: Option<String>,
}

/// GraphQL `data` payload of the settings query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsData {
    #[serde(default)]
    pub app_settings: Option<Settings>,
}
