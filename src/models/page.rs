// src/models/page.rs

use serde::{Deserialize, Serialize};

/// A single content page as delivered by the CMS.
///
/// Fetched per request and never cached beyond it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Publication timestamp, e.g. "2020-05-04T12:30:00".
    pub date: String,

    pub title: Rendered,

    pub content: Rendered,

    #[serde(default)]
    pub excerpt: Option<Rendered>,

    #[serde(default)]
    pub author: Option<Author>,

    #[serde(default)]
    pub featured_media: Option<FeaturedMedia>,
}

/// CMS rich-text field. `rendered` holds untrusted HTML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeaturedMedia {
    pub media_type: MediaType,

    #[serde(default)]
    pub source_url: Option<String>,

    #[serde(default)]
    pub alt_text: Option<String>,

    #[serde(default)]
    pub caption: Option<Rendered>,
}

impl FeaturedMedia {
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    File,
    #[serde(other)]
    Other,
}

/// GraphQL `data` payload of the page query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesData {
    #[serde(default)]
    pub wp_pages: Option<PageList>,
}

#[derive(Debug, Deserialize)]
pub struct PageList {
    #[serde(default)]
    pub pages: Option<Vec<Page>>,
}

impl PagesData {
    /// Flattens the nullable GraphQL envelope into a plain list.
    pub fn into_pages(self) -> Vec<Page> {
        self.wp_pages.and_then(|list| list.pages).unwrap_or_default()
    }
}
