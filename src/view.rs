// src/view.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    models::{page::Page, settings::Settings},
    utils::{
        html::{CONTENT_POLICY, STRIP_ALL_POLICY, excerpt_to_description},
        memo::Sanitizer,
    },
};

/// Progress of an upstream fetch as seen by the renderer.
#[derive(Debug, Clone)]
pub enum FetchState<T> {
    Loading,
    Failed(String),
    Ready(T),
}

/// Everything a page document needs. HTML fields are already sanitized;
/// plain-text fields are escaped by [`PageView::to_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// Escaped text for `<title>`.
    pub document_title: String,
    pub og_image: Option<String>,
    pub description: String,
    pub title_html: String,
    pub posted_on: String,
    pub author: Option<String>,
    pub featured_image: Option<FeaturedImage>,
    pub body_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedImage {
    pub src: String,
    pub alt: String,
    pub caption_html: Option<String>,
}

impl PageView {
    pub fn assemble(page: &Page, settings: Option<&Settings>, sanitizer: &Sanitizer) -> Self {
        let title_text = sanitizer.clean(&page.title.rendered, &STRIP_ALL_POLICY);
        let document_title = match settings.and_then(|s| s.title_tag.as_deref()) {
            Some(tag) if !tag.is_empty() => format!("{} | {}", title_text, encode_text(tag)),
            _ => title_text.to_string(),
        };

        let image = page.featured_media.as_ref().filter(|media| media.is_image());

        let og_image = image
            .and_then(|media| media.source_url.clone())
            .filter(|src| !src.is_empty());

        let featured_image = image.map(|media| {
            let caption_html = media
                .caption
                .as_ref()
                .filter(|caption| !caption.rendered.is_empty())
                .map(|caption| sanitizer.clean(&caption.rendered, &STRIP_ALL_POLICY).to_string())
                .filter(|cleaned| !cleaned.is_empty());

            FeaturedImage {
                src: media.source_url.clone().unwrap_or_default(),
                alt: media.alt_text.clone().unwrap_or_default(),
                caption_html,
            }
        });

        Self {
            document_title,
            og_image,
            description: page
                .excerpt
                .as_ref()
                .map(|excerpt| excerpt_to_description(&excerpt.rendered))
                .unwrap_or_default(),
            title_html: sanitizer.clean(&page.title.rendered, &CONTENT_POLICY).to_string(),
            posted_on: format_posted_date(&page.date),
            author: page.author.as_ref().map(|author| author.name.clone()),
            featured_image,
            body_html: sanitizer.clean(&page.content.rendered, &CONTENT_POLICY).to_string(),
        }
    }

    pub fn to_document(&self) -> String {
        let mut head = format!("<title>{}</title>", self.document_title);
        if let Some(src) = &self.og_image {
            head.push_str(&format!(
                r#"<meta property="og:image" content="{}">"#,
                encode_double_quoted_attribute(src)
            ));
        }
        head.push_str(&format!(
            r#"<meta name="description" content="{}">"#,
            encode_double_quoted_attribute(&self.description)
        ));

        let mut meta = format!("<span>Posted {} </span>", encode_text(&self.posted_on));
        if let Some(author) = &self.author {
            meta.push_str(&format!("<span> by {}</span>", encode_text(author)));
        }

        let featured = self
            .featured_image
            .as_ref()
            .map(|image| {
                let caption = image
                    .caption_html
                    .as_ref()
                    .map(|html| format!("<span>{html}</span>"))
                    .unwrap_or_default();
                format!(
                    r#"<div class="mw9 pb8"><img class="postFeaturedImage" src="{}" alt="{}">{}</div>"#,
                    encode_double_quoted_attribute(&image.src),
                    encode_double_quoted_attribute(&image.alt),
                    caption
                )
            })
            .unwrap_or_default();

        let body = format!(
            concat!(
                r#"<div class="postFlex pt6 pb8 ph3"><div class="postContainer ph3">"#,
                r#"<h1 class="postTitle t-heading-1">{title}</h1>"#,
                r#"<p class="postMeta t-small mw9 c-muted-1">{meta}</p>"#,
                "{featured}",
                r#"<div class="postBody">{body}</div>"#,
                "</div></div>"
            ),
            title = self.title_html,
            meta = meta,
            featured = featured,
            body = self.body_html,
        );

        document(&head, &body)
    }
}

/// Renders whichever state the page and settings fetches are in.
///
/// A missing page wins over pending settings; pending settings hold back the
/// body. Failed settings only cost the title suffix.
pub fn render_document(
    page: FetchState<Option<Page>>,
    settings: FetchState<Settings>,
    sanitizer: &Sanitizer,
) -> String {
    let page = match page {
        FetchState::Loading => return loading_document(),
        FetchState::Failed(message) => return error_document(&message),
        FetchState::Ready(None) => return not_found_document(),
        FetchState::Ready(Some(page)) => page,
    };

    let settings = match settings {
        FetchState::Loading => return loading_document(),
        FetchState::Failed(message) => {
            tracing::warn!("Rendering without settings: {}", message);
            None
        }
        FetchState::Ready(settings) => Some(settings),
    };

    PageView::assemble(&page, settings.as_ref(), sanitizer).to_document()
}

pub fn loading_document() -> String {
    document(
        "",
        r#"<div class="mv5 flex justify-center" style="min-height: 800px"><div class="spinner" role="status" aria-label="Loading"></div></div>"#,
    )
}

pub fn error_document(message: &str) -> String {
    document(
        "",
        &format!(
            r#"<div class="ph5" style="min-height: 800px">Error! {}</div>"#,
            encode_text(message)
        ),
    )
}

pub fn not_found_document() -> String {
    document(
        "",
        r#"<div class="postContainer ph3"><h2>No page found.</h2></div>"#,
    )
}

fn document(head: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8">{head}</head><body>{body}</body></html>"#
    )
}

/// en-US long date ("May 4, 2020"), or "Invalid Date" when unparsable.
fn format_posted_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => "Invalid Date".to_string(),
    }
}
