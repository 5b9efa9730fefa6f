use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use ammonia::Builder;
use regex::Regex;

/// Tags whose content is dropped together with the tag under every policy.
/// Any other disallowed tag is unwrapped: the tag goes, its children stay.
pub const CLEAN_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Upper bound on re-cleaning passes in [`clean_to_fixpoint`].
const MAX_CLEAN_PASSES: usize = 4;

/// A named, immutable allow-list.
///
/// Anything not listed here is rejected. Only [`CONTENT_POLICY`] and
/// [`STRIP_ALL_POLICY`] exist outside this crate; their addresses are the
/// memoization identity in [`crate::utils::memo::Sanitizer`].
#[derive(Debug, PartialEq, Eq)]
pub struct SanitizationPolicy {
    pub(crate) name: &'static str,
    pub(crate) allowed_tags: &'static [&'static str],
    pub(crate) allowed_attributes: &'static [(&'static str, &'static [&'static str])],
    pub(crate) allowed_schemes: &'static [&'static str],
}

/// Policy for page titles and bodies.
pub static CONTENT_POLICY: SanitizationPolicy = SanitizationPolicy {
    name: "content",
    allowed_tags: &[
        "h1", "h2", "h3", "h4", "h5", "h6", "blockquote", "p", "a", "ul", "ol", "nl", "li", "b",
        "i", "strong", "section", "em", "strike", "code", "hr", "br", "div", "table", "thead",
        "caption", "tbody", "tr", "th", "td", "pre", "img", "iframe", "figure",
    ],
    allowed_attributes: &[
        ("a", &["href", "name", "target"]),
        ("img", &["src", "alt"]),
        ("iframe", &["src", "scrolling", "frameborder", "width", "height", "id"]),
    ],
    allowed_schemes: &["http", "https", "mailto", "tel"],
};

/// Policy reducing a fragment to escaped plain text. Used for image captions.
pub static STRIP_ALL_POLICY: SanitizationPolicy = SanitizationPolicy {
    name: "strip-all",
    allowed_tags: &[],
    allowed_attributes: &[],
    allowed_schemes: &[],
};

impl SanitizationPolicy {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Builds the ammonia cleaner enforcing exactly this policy.
    ///
    /// Ammonia's own defaults (generic `lang`/`title` attributes, injected
    /// `rel="noopener noreferrer"`) are switched off so the output only ever
    /// carries what the policy lists.
    pub fn builder(&self) -> Builder<'static> {
        let tag_attributes: HashMap<&'static str, HashSet<&'static str>> = self
            .allowed_attributes
            .iter()
            .map(|(tag, attrs)| (*tag, attrs.iter().copied().collect()))
            .collect();

        let mut builder = Builder::default();
        builder
            .tags(self.allowed_tags.iter().copied().collect())
            .clean_content_tags(CLEAN_CONTENT_TAGS.iter().copied().collect())
            .tag_attributes(tag_attributes)
            .generic_attributes(HashSet::new())
            .url_schemes(self.allowed_schemes.iter().copied().collect())
            .link_rel(None)
            .strip_comments(true);
        builder
    }
}

/// Clean an HTML fragment against `policy`.
///
/// Pure and infallible: malformed markup is parsed permissively and whatever
/// the policy does not allow is dropped. `<script>` and `<style>` lose their
/// content as well; other disallowed tags are unwrapped. URL attributes whose
/// scheme is not allow-listed are removed, after entity decoding, so
/// `jav&#x61;script:` is caught like `javascript:`.
///
/// Callers rendering pages should go through the memoizing
/// [`crate::utils::memo::Sanitizer`] instead.
pub fn sanitize(input: &str, policy: &SanitizationPolicy) -> String {
    clean_to_fixpoint(&policy.builder(), input)
}

/// Cleans `input` and re-cleans the output until it stops changing.
///
/// Unwrapping a tag can leave markup the parser restructures on the next
/// read (a `<tr>` left directly under `<table>` gains an implicit `<tbody>`),
/// so a single pass is not idempotent.
pub(crate) fn clean_to_fixpoint(builder: &Builder<'_>, input: &str) -> String {
    let mut cleaned = builder.clean(input).to_string();
    for _ in 1..MAX_CLEAN_PASSES {
        let again = builder.clean(&cleaned).to_string();
        if again == cleaned {
            break;
        }
        cleaned = again;
    }
    cleaned
}

static PARAGRAPH_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?p>").expect("paragraph tag pattern is valid"));

/// Turn a CMS excerpt into a meta description: drop bare `<p>`/`</p>` tags
/// and trim. Other markup is left alone; the result is attribute-escaped at
/// render time.
pub fn excerpt_to_description(excerpt: &str) -> String {
    PARAGRAPH_TAG.replace_all(excerpt, "").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_strips_paragraphs_and_trims() {
        assert_eq!(excerpt_to_description("<p>Hello world</p>"), "Hello world");
        assert_eq!(
            excerpt_to_description("<P>One</P>\n<p>Two</p>\n"),
            "One\nTwo"
        );
        assert_eq!(excerpt_to_description(""), "");
    }

    #[test]
    fn description_keeps_other_markup() {
        assert_eq!(
            excerpt_to_description("<p>Read <em>more</em></p>"),
            "Read <em>more</em>"
        );
    }

    #[test]
    fn policy_names_are_distinct() {
        assert_ne!(CONTENT_POLICY.name(), STRIP_ALL_POLICY.name());
    }

    #[test]
    fn unwrapped_table_sections_settle_in_one_call() {
        let raw = "<table><tfoot><tr><td>x</td></tr></tfoot></table>";
        let once = sanitize(raw, &CONTENT_POLICY);

        assert_eq!(once, "<table><tbody><tr><td>x</td></tr></tbody></table>");
        assert_eq!(sanitize(&once, &CONTENT_POLICY), once);
    }
}
