//! Character encoding detection for raw page bytes.
//!
//! Pages arrive either from disk or over HTTP. The charset is taken from the
//! `Content-Type` header when there is one, then from the document's own
//! meta declarations, and falls back to UTF-8.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// `charset=` parameter in a `Content-Type` value.
#[allow(clippy::expect_used)]
static HEADER_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).expect("valid regex")
});

/// `<meta charset="...">`
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/]+)"#).expect("valid regex")
});

/// `<meta http-equiv="Content-Type" content="...; charset=...">`
#[allow(clippy::expect_used)]
static HTTP_EQUIV_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("valid regex")
});

/// How many leading bytes are scanned for meta declarations.
const SNIFF_LIMIT: usize = 1024;

fn label_to_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

fn capture(re: &Regex, haystack: &str) -> Option<String> {
    re.captures(haystack)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Pick the encoding for a page.
#[must_use]
pub fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some(encoding) = content_type
        .and_then(|value| capture(&HEADER_CHARSET_RE, value))
        .and_then(|label| label_to_encoding(&label))
    {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(SNIFF_LIMIT)]);

    [&*META_CHARSET_RE, &*HTTP_EQUIV_CHARSET_RE]
        .into_iter()
        .filter_map(|re| capture(re, &head))
        .find_map(|label| label_to_encoding(&label))
        .unwrap_or(UTF_8)
}

/// Decode page bytes to a UTF-8 string.
///
/// Malformed sequences become U+FFFD instead of failing.
#[must_use]
pub fn decode_html(bytes: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(bytes, content_type);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(bytes).into_owned();
    }
    let (decoded, _, _) = encoding.decode(bytes);
    decoded.into_owned()
}
