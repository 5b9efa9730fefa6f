// tests/sanitize_tests.rs

use storefront_page::utils::html::{CONTENT_POLICY, STRIP_ALL_POLICY, sanitize};

const SAMPLES: &[&str] = &[
    "<p>plain paragraph</p>",
    "<script>alert(1)</script><p>after</p>",
    r#"<a href="javascript:x" onclick="y">click</a>"#,
    r#"<div><span style="color:red">nested <b>bold</b></span></div>"#,
    "<p>unclosed <em>emphasis",
    "<table><tr><td>cell</td></tr></table>",
    r#"<iframe src="https://www.youtube.com/embed/x" width="560" height="315" allowfullscreen></iframe>"#,
    "a < b && c > d",
    "<!-- comment --><p>text</p>",
    r#"<img src="data:image/png;base64,AAAA" alt="inline">"#,
    "<table><tfoot><tr><td>x</td></tr></tfoot></table>",
    "<table><colgroup><col></colgroup><tr><td>y</td></tr></table>",
    "<ul><span><li>item</li></span></ul>",
    "<p><div>block in paragraph</div></p>",
];

#[test]
fn script_is_removed_with_its_content() {
    assert_eq!(
        sanitize("<p>before</p><script>alert(1)</script><p>after</p>", &CONTENT_POLICY),
        "<p>before</p><p>after</p>"
    );
    assert_eq!(sanitize("<style>body{display:none}</style>ok", &CONTENT_POLICY), "ok");
}

#[test]
fn javascript_link_loses_href_and_handlers() {
    assert_eq!(
        sanitize(r#"<a href="javascript:x" onclick="y">click</a>"#, &CONTENT_POLICY),
        "<a>click</a>"
    );
}

#[test]
fn encoded_schemes_are_rejected() {
    for raw in [
        r#"<a href="jav&#x61;script:alert(1)">x</a>"#,
        r#"<a href="&#106;avascript:alert(1)">x</a>"#,
        r#"<a href="JAVASCRIPT:alert(1)">x</a>"#,
        r#"<a href=" javascript:alert(1)">x</a>"#,
        r#"<a href="vbscript:msgbox(1)">x</a>"#,
    ] {
        assert_eq!(sanitize(raw, &CONTENT_POLICY), "<a>x</a>", "input: {raw}");
    }
}

#[test]
fn allowed_schemes_and_attributes_survive() {
    assert_eq!(
        sanitize(
            r#"<a href="https://example.com/x" target="_blank" name="top" title="t">ok</a>"#,
            &CONTENT_POLICY
        ),
        r#"<a href="https://example.com/x" target="_blank" name="top">ok</a>"#
    );
    assert_eq!(
        sanitize(r#"<a href="mailto:help@example.com">mail</a>"#, &CONTENT_POLICY),
        r#"<a href="mailto:help@example.com">mail</a>"#
    );
    assert_eq!(
        sanitize(r#"<a href="tel:+15551234">call</a>"#, &CONTENT_POLICY),
        r#"<a href="tel:+15551234">call</a>"#
    );
    assert_eq!(
        sanitize(r#"<img src="https://cdn.example.com/a.png" alt="A" onerror="x()">"#, &CONTENT_POLICY),
        r#"<img src="https://cdn.example.com/a.png" alt="A">"#
    );
}

#[test]
fn relative_links_pass_through() {
    assert_eq!(
        sanitize(r#"<a href="/pages/faq">faq</a>"#, &CONTENT_POLICY),
        r#"<a href="/pages/faq">faq</a>"#
    );
}

#[test]
fn iframe_keeps_only_listed_attributes() {
    assert_eq!(
        sanitize(
            r#"<iframe src="https://player.example.com/v/1" width="560" height="315" frameborder="0" allowfullscreen onload="x()"></iframe>"#,
            &CONTENT_POLICY
        ),
        r#"<iframe src="https://player.example.com/v/1" width="560" height="315" frameborder="0"></iframe>"#
    );
}

#[test]
fn disallowed_tags_are_unwrapped() {
    assert_eq!(
        sanitize(r#"<p><span class="x">kept</span> <font color="red">text</font></p>"#, &CONTENT_POLICY),
        "<p>kept text</p>"
    );
}

#[test]
fn attributes_are_dropped_from_tags_without_entries() {
    assert_eq!(
        sanitize(r#"<p class="lead" style="color:red" id="p1">x</p>"#, &CONTENT_POLICY),
        "<p>x</p>"
    );
}

#[test]
fn strip_all_keeps_only_text() {
    assert_eq!(
        sanitize("<b>Caption <i>text</i></b>", &STRIP_ALL_POLICY),
        "Caption text"
    );
    assert_eq!(
        sanitize(r#"<a href="https://example.com">link</a><script>x()</script>"#, &STRIP_ALL_POLICY),
        "link"
    );
    assert_eq!(sanitize("Tom &amp; Jerry", &STRIP_ALL_POLICY), "Tom &amp; Jerry");
}

#[test]
fn text_is_escaped() {
    assert_eq!(sanitize("a < b", &CONTENT_POLICY), "a &lt; b");
}

#[test]
fn sanitize_is_idempotent() {
    for policy in [&CONTENT_POLICY, &STRIP_ALL_POLICY] {
        for raw in SAMPLES {
            let once = sanitize(raw, policy);
            let twice = sanitize(&once, policy);
            assert_eq!(once, twice, "policy {} input {raw}", policy.name());
        }
    }
}

#[test]
fn unwrapped_table_footer_is_normalized() {
    assert_eq!(
        sanitize("<table><tfoot><tr><td>x</td></tr></tfoot></table>", &CONTENT_POLICY),
        "<table><tbody><tr><td>x</td></tr></tbody></table>"
    );
}

#[test]
fn malformed_input_never_panics() {
    for raw in ["<", "<<p>>", "</div></div>", "<a href=", "<p <b>", "\u{0}"] {
        let _ = sanitize(raw, &CONTENT_POLICY);
        let _ = sanitize(raw, &STRIP_ALL_POLICY);
    }
}
