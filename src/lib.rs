//! # wiki-discography
//!
//! Extracts studio-album records from Wikipedia discography pages.
//!
//! Given the rendered HTML of a page such as "Iron Maiden discography", the
//! crate finds the "Studio albums" subsection, walks its tables and returns
//! one [`Album`] per data row: link, title, release date, recording date and
//! label, each as written on the page.
//!
//! ## Quick Start
//!
//! ```rust
//! use wiki_discography::scrape;
//!
//! let html = r#"<div class="mw-parser-output">
//!   <h2><span class="mw-headline" id="Albums">Albums</span></h2>
//!   <h3><span class="mw-headline" id="Studio_albums">Studio albums</span></h3>
//!   <table>
//!     <tr><th>Title</th><th>Album details</th></tr>
//!     <tr>
//!       <th><a href="/wiki/Killers_(album)" title="Killers (album)">Killers</a></th>
//!       <td><ul><li>Released: 2 February 1981</li><li>Label: <a>EMI</a></li></ul></td>
//!     </tr>
//!   </table>
//! </div>"#;
//!
//! let result = scrape(html)?;
//! assert_eq!(result.albums.len(), 1);
//! assert_eq!(result.albums[0].id.as_deref(), Some("Killers (album)"));
//! assert_eq!(result.albums[0].label.as_deref(), Some("EMI"));
//! # Ok::<(), wiki_discography::Error>(())
//! ```
//!
//! ## Behaviour on odd markup
//!
//! Nothing in the page is fatal. A missing section yields no albums, a row
//! without a link or list yields a partial album, and every such finding is
//! listed in [`ScrapeResult::warnings`]. Only I/O and invalid options are
//! reported as [`Error`].

mod error;
mod options;
mod result;
mod scrape;

/// DOM helpers over `dom_query` with whitespace-proof child access.
pub mod dom;

/// Marker table and markup constants.
pub mod patterns;

/// Locating the tables of the target subsection.
pub mod section;

/// Turning table rows into album records.
pub mod table;

/// URL checks and href resolution.
pub mod url_utils;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page sources, album sinks and the read-scrape-write pipeline.
pub mod sink;

// Public API - re-exports
pub use error::{Error, Result, Warning};
pub use options::Options;
pub use result::{Album, AlbumField, ScrapeResult};
pub use section::locate_studio_album_tables;
pub use table::extract_albums;

/// Scrapes the studio albums of a page using default options.
///
/// # Errors
///
/// Never fails with default options; see [`scrape_with_options`].
pub fn scrape(html: &str) -> Result<ScrapeResult> {
    scrape_with_options(html, &Options::default())
}

/// Scrapes a page with custom options.
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] or [`Error::InvalidOption`] when
/// [`Options::validate`] rejects the options. Problems in the page itself
/// are never errors.
///
/// # Example
///
/// ```rust
/// use wiki_discography::{scrape_with_options, Options};
///
/// let options = Options {
///     section_id: "Live_albums".to_string(),
///     ..Options::default()
/// };
/// let result = scrape_with_options("<div class=\"mw-parser-output\"></div>", &options)?;
/// assert!(result.albums.is_empty());
/// # Ok::<(), wiki_discography::Error>(())
/// ```
pub fn scrape_with_options(html: &str, options: &Options) -> Result<ScrapeResult> {
    scrape::scrape_page(html, options)
}

/// Scrapes a page given as raw bytes, detecting its character encoding.
///
/// # Errors
///
/// Same as [`scrape`].
pub fn scrape_bytes(html: &[u8]) -> Result<ScrapeResult> {
    scrape_bytes_with_options(html, &Options::default())
}

/// Scrapes a page given as raw bytes with custom options.
///
/// # Errors
///
/// Same as [`scrape_with_options`].
pub fn scrape_bytes_with_options(html: &[u8], options: &Options) -> Result<ScrapeResult> {
    let html_str = encoding::transcode_to_utf8(html);
    scrape_with_options(&html_str, options)
}
