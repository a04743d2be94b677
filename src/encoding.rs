//! Charset sniffing for byte input.
//!
//! A byte-order mark wins. Otherwise the first 1024 bytes are scanned for a
//! charset declaration, which covers both `<meta charset=…>` and the
//! `http-equiv="Content-Type"` form. Anything unrecognized is read as UTF-8.

use std::borrow::Cow;
use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::bytes::Regex;

/// Bytes inspected for a charset declaration.
pub const SNIFF_LIMIT: usize = 1024;

#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i-u)<meta[^>]+?charset\s*=\s*["']?([^"'\s/>;]+)"#).expect("META_CHARSET regex")
});

/// Detect the encoding of an HTML document.
///
/// ```rust
/// use rs_partials::encoding::detect_encoding;
///
/// let html = br#"<meta http-equiv="Content-Type" content="text/html; charset=windows-1252">"#;
/// assert_eq!(detect_encoding(html).name(), "windows-1252");
/// ```
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = &html[..html.len().min(SNIFF_LIMIT)];
    META_CHARSET
        .captures(head)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to UTF-8. Malformed sequences become U+FFFD.
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> Cow<'_, str> {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        tracing::debug!(encoding = used.name(), "replaced malformed byte sequences");
    }
    decoded
}
