//! Configuration options for discography scraping.
//!
//! The `Options` struct makes every knob of the scrape explicit: which
//! container holds the article body, which subsection to read, how links are
//! resolved and where the output goes.

use std::path::PathBuf;

use crate::dom::is_valid_selector;
use crate::error::{Error, Result};
use crate::url_utils::is_absolute_url;

/// Configuration options for a scrape.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the settings that read the "Studio albums" tables of an English
/// Wikipedia discography page.
///
/// # Example
///
/// ```rust
/// use wiki_discography::Options;
///
/// // Read the live albums instead, and keep output human readable
/// let options = Options {
///     section_id: "Live_albums".to_string(),
///     pretty_json: true,
///     ..Options::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// URL of the page being scraped.
    ///
    /// Only used for provenance: it is echoed into
    /// [`ScrapeResult::source_url`](crate::ScrapeResult::source_url) and logged.
    /// Fetching the page is the caller's job.
    ///
    /// Default: `None`
    pub page_url: Option<String>,

    /// CSS selector of the main-content container whose children are scanned.
    ///
    /// The first match is used.
    ///
    /// Default: `".mw-parser-output"`
    pub content_selector: String,

    /// Anchor id of the subsection whose tables are read.
    ///
    /// Default: `"Studio_albums"`
    pub section_id: String,

    /// Prefix prepended verbatim to every album link's `href`.
    ///
    /// Default: `"https://en.wikipedia.org/"`
    pub base_url: String,

    /// Level of the first heading that ends the page lead.
    ///
    /// Default: `2`
    pub boundary_heading_level: u8,

    /// Level of the headings that open and close subsections.
    ///
    /// Default: `3`
    pub subsection_heading_level: u8,

    /// Number of leading rows of each table treated as headers.
    ///
    /// Default: `1`
    pub header_rows: usize,

    /// Drop the last node of a subsection that runs to the end of the
    /// content container.
    ///
    /// The heading that closes a subsection is never collected, so this only
    /// affects the last subsection of a page, whose trailer is usually a
    /// navbox or a footnote. The table filter removes such trailers anyway;
    /// a subsection ending in a table loses that table.
    ///
    /// Default: `false`
    pub drop_trailing_node: bool,

    /// File the album list is written to.
    ///
    /// Default: `"albums.json"`
    pub output_path: PathBuf,

    /// Indent the JSON output.
    ///
    /// Default: `false`
    pub pretty_json: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            page_url: None,
            content_selector: ".mw-parser-output".to_string(),
            section_id: "Studio_albums".to_string(),
            base_url: "https://en.wikipedia.org/".to_string(),
            boundary_heading_level: 2,
            subsection_heading_level: 3,
            header_rows: 1,
            drop_trailing_node: false,
            output_path: PathBuf::from("albums.json"),
            pretty_json: false,
        }
    }
}

impl Options {
    /// Check that the options describe a scrape that can run.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] when `base_url` or `page_url` is not an
    /// absolute http(s) URL, and [`Error::InvalidOption`] for an empty or
    /// unparsable selector, an empty section id, or heading levels outside
    /// `1..=6` where the subsection level is not deeper than the boundary
    /// level.
    pub fn validate(&self) -> Result<()> {
        if !is_absolute_url(&self.base_url) {
            return Err(Error::InvalidUrl {
                field: "base_url",
                value: self.base_url.clone(),
            });
        }

        if let Some(ref page_url) = self.page_url {
            if !is_absolute_url(page_url) {
                return Err(Error::InvalidUrl {
                    field: "page_url",
                    value: page_url.clone(),
                });
            }
        }

        if self.content_selector.trim().is_empty() {
            return Err(Error::InvalidOption("content_selector is empty".to_string()));
        }

        if !is_valid_selector(&self.content_selector) {
            return Err(Error::InvalidOption(format!(
                "content_selector {:?} is not a valid CSS selector",
                self.content_selector
            )));
        }

        if self.section_id.trim().is_empty() {
            return Err(Error::InvalidOption("section_id is empty".to_string()));
        }

        let levels = 1..=6;
        if !levels.contains(&self.boundary_heading_level)
            || !levels.contains(&self.subsection_heading_level)
        {
            return Err(Error::InvalidOption(format!(
                "heading levels must be within 1..=6 (got {} and {})",
                self.boundary_heading_level, self.subsection_heading_level
            )));
        }

        if self.subsection_heading_level <= self.boundary_heading_level {
            return Err(Error::InvalidOption(format!(
                "subsection heading level {} must be deeper than boundary level {}",
                self.subsection_heading_level, self.boundary_heading_level
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert!(opts.page_url.is_none());
        assert_eq!(opts.content_selector, ".mw-parser-output");
        assert_eq!(opts.section_id, "Studio_albums");
        assert_eq!(opts.base_url, "https://en.wikipedia.org/");
        assert_eq!(opts.boundary_heading_level, 2);
        assert_eq!(opts.subsection_heading_level, 3);
        assert_eq!(opts.header_rows, 1);
        assert!(!opts.drop_trailing_node);
        assert_eq!(opts.output_path, PathBuf::from("albums.json"));
        assert!(!opts.pretty_json);
    }

    #[test]
    fn test_defaults_validate() {
        assert!(Options::default().validate().is_ok());
    }

    #[test]
    fn test_relative_base_url_rejected() {
        let opts = Options {
            base_url: "/wiki/".to_string(),
            ..Options::default()
        };

        match opts.validate() {
            Err(Error::InvalidUrl { field, .. }) => assert_eq!(field, "base_url"),
            other => panic!("expected InvalidUrl, got {other:?}"),
        }
    }

    #[test]
    fn test_page_url_checked_when_present() {
        let opts = Options {
            page_url: Some("Iron_Maiden_discography".to_string()),
            ..Options::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(Error::InvalidUrl { field: "page_url", .. })
        ));

        let opts = Options {
            page_url: Some("https://en.wikipedia.org/wiki/Iron_Maiden_discography".to_string()),
            ..Options::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_empty_section_id_rejected() {
        let opts = Options {
            section_id: "  ".to_string(),
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOption(_))));
    }

    #[test]
    fn test_unparsable_selector_rejected() {
        let opts = Options {
            content_selector: "div[".to_string(),
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOption(_))));

        let opts = Options {
            content_selector: "#mw-content-text > .mw-parser-output".to_string(),
            ..Options::default()
        };
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_heading_levels_must_nest() {
        let opts = Options {
            boundary_heading_level: 3,
            subsection_heading_level: 3,
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOption(_))));

        let opts = Options {
            subsection_heading_level: 7,
            ..Options::default()
        };
        assert!(matches!(opts.validate(), Err(Error::InvalidOption(_))));

        let opts = Options {
            boundary_heading_level: 3,
            subsection_heading_level: 4,
            ..Options::default()
        };
        assert!(opts.validate().is_ok());
    }
}
