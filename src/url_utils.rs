//! URL utility functions.
//!
//! Album links on Wikipedia are site-relative (`/wiki/Killers_(album)`).
//! They are turned into absolute links by plain concatenation with the
//! configured base URL, so the output matches the link text byte for byte.

use url::Url;

/// Check if a string is a valid absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }

    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Prefix an `href` with the base URL.
///
/// No normalization happens: a base ending in `/` joined with an href
/// starting with `/` yields a double slash, which existing consumers of the
/// JSON expect.
///
/// # Example
///
/// ```rust
/// use wiki_discography::url_utils::join_href;
///
/// assert_eq!(
///     join_href("https://en.wikipedia.org/", "/wiki/Killers_(album)"),
///     "https://en.wikipedia.org//wiki/Killers_(album)"
/// );
/// ```
#[must_use]
pub fn join_href(base: &str, href: &str) -> String {
    let mut out = String::with_capacity(base.len() + href.len());
    out.push_str(base);
    out.push_str(href);
    out
}
