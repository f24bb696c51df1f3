//! Page-level scrape: parse, locate the section, read its tables.

use crate::dom;
use crate::error::Result;
use crate::options::Options;
use crate::result::ScrapeResult;
use crate::section;
use crate::table;

/// Main entry point for scraping one page.
pub(crate) fn scrape_page(html: &str, options: &Options) -> Result<ScrapeResult> {
    options.validate()?;

    if let Some(ref url) = options.page_url {
        log::info!("scraping {url} ({} bytes of HTML)", html.len());
    } else {
        log::debug!("scraping page ({} bytes of HTML)", html.len());
    }

    let document = dom::parse(html);
    let mut warnings = Vec::new();

    let tables = section::locate_tables_reporting(&document, options, &mut warnings);
    let albums = table::extract_albums_reporting(&tables, options, &mut warnings);

    log::debug!(
        "{} album(s) from {} table(s), {} warning(s)",
        albums.len(),
        tables.len(),
        warnings.len()
    );

    Ok(ScrapeResult {
        albums,
        warnings,
        tables: tables.len(),
        source_url: options.page_url.clone(),
    })
}
