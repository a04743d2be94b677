use rs_partials::{format_html, split, split_bytes, suggest_components, Error};
use std::time::{Duration, Instant};

#[test]
fn split_does_not_panic_on_malformed_html_unclosed_tags() {
    let result = split("<section class=\"hero\">text<div>more").unwrap();
    let rebuilt: String = result.partials.values().cloned().collect();

    assert!(rebuilt.contains("text") || result.main_html.contains("text"));
    assert!(rebuilt.contains("more") || result.main_html.contains("more"));
}

#[test]
fn split_does_not_panic_on_malformed_html_invalid_nesting() {
    assert!(split("<p><div></p></div>").is_ok());
    assert!(split("<ul><li><section><li>x</ul>").is_ok());
}

#[test]
fn split_does_not_panic_on_malformed_html_broken_attributes() {
    assert!(split("<div class=\"test id=broken>").is_ok());
    assert!(split("<button class='btn onclick=\"x\">Go").is_ok());
}

#[test]
fn split_handles_empty_and_whitespace_input() {
    for html in ["", "   \n\t", "<!-- only a comment -->"] {
        let result = split(html).unwrap();
        assert!(result.partials.is_empty(), "partials for {html:?}");
        assert!(result.main_html.contains("<body>"));
    }
}

#[test]
fn split_handles_plain_text_input() {
    let result = split("just some text & more").unwrap();

    assert!(result.partials.is_empty());
    assert!(result.main_html.contains("just some text &amp; more"));
}

#[test]
fn split_preserves_existing_comments() {
    let result = split("<header><!-- keep me --><h1>T</h1></header><footer>f</footer>").unwrap();

    assert!(result.partials["header"].contains("<!-- keep me -->"));
}

#[test]
fn user_comment_resembling_a_marker_is_kept_verbatim() {
    let result = split("<header><!--EJS_INCLUDE:footer--><h1>T</h1></header><footer><p>f</p></footer>").unwrap();

    assert_eq!(result.partials["header"], "<header><!--EJS_INCLUDE:footer--><h1>T</h1></header>");
    assert!(result.warnings.is_empty());
}

#[test]
fn marker_lookalikes_in_scripts_and_attributes_are_written_back_unchanged() {
    let html = r#"<header><!--EJS_INCLUDE:0:footer--><h1>T</h1><script>var s = "<!--EJS_INCLUDE:0:footer-->";</script></header><footer data-x="<!--EJS_INCLUDE:1:footer-->"><p>f</p></footer>"#;

    let result = split(html).unwrap();

    assert_eq!(
        result.partials["header"],
        r#"<header><!--EJS_INCLUDE:0:footer--><h1>T</h1><script>var s = "<!--EJS_INCLUDE:0:footer-->";</script></header>"#
    );
    assert!(result.partials["footer"].starts_with(r#"<footer data-x="<!--EJS_INCLUDE:1:footer-->">"#));
    assert!(!result.main_html.contains("EJS_INCLUDE"));
    assert!(result.main_html.contains("<%- include('partials/footer') %>"));
}

#[test]
fn split_bytes_handles_invalid_utf8() {
    let result = split_bytes(b"<header><h1>bad \xFF\xFE byte</h1></header><footer>f</footer>").unwrap();

    assert!(result.partials["header"].contains('\u{FFFD}'));
}

#[test]
fn deep_nesting_terminates_quickly() {
    let depth = 500;
    let html = format!("{}<button>deep</button>{}", "<div>".repeat(depth), "</div>".repeat(depth));

    let start = Instant::now();
    let result = split(&html);
    assert!(start.elapsed() < Duration::from_secs(10));
    assert!(result.is_ok());
}

#[test]
fn wide_pages_split_every_repeat() {
    let cards: String = (0..500)
        .map(|i| format!("<div class=\"card\"><h3>Card {i}</h3><p>Body {i}</p></div>"))
        .collect();
    let html = format!("<section class=\"gallery\">{cards}</section><footer>f</footer>");

    let result = split(&html).unwrap();

    assert_eq!(result.partials.len(), 502);
    assert!(result.partials.contains_key("div-card-500"));
}

#[test]
fn format_and_analysis_accept_malformed_input() {
    assert!(format_html("<td>cell<tr>row").is_ok());
    assert!(suggest_components("<li><li><li>").is_ok());
}

#[test]
fn errors_render_readable_messages() {
    let err = Error::InvalidPartialName("../x".to_string());
    assert_eq!(err.to_string(), "Invalid partial name: \"../x\"");

    let err = Error::RenderError("void element <br> has child nodes".to_string());
    assert!(err.to_string().starts_with("HTML rendering failed"));
}
