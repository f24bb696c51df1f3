//! Character encoding detection and transcoding.
//!
//! Saved pages are read as bytes. Wikipedia serves UTF-8, but pages saved
//! by a browser or proxy may be re-encoded, so the charset declared in the
//! document head wins when there is one.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// How many leading bytes are searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` and
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">`
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s;>/]+)"#).expect("valid regex")
});

/// Charset label declared in the document head, if any.
fn declared_charset(head: &str) -> Option<&str> {
    CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Detect the character encoding of raw page bytes.
///
/// Only the first kilobyte is examined. Unknown labels and pages without a
/// declaration are treated as UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode raw page bytes to a UTF-8 string.
///
/// Invalid sequences become U+FFFD instead of failing the scrape.
///
/// # Examples
///
/// ```
/// use wiki_discography::encoding::transcode_to_utf8;
///
/// let html = b"<meta charset=\"ISO-8859-1\"><li>Label: Mot\xF6rhead Records</li>";
/// assert!(transcode_to_utf8(html).contains("Motörhead"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("page decoded as {} with replacement characters", used.name());
    }
    decoded.into_owned()
}
