//! Error types for wiki-discography.
//!
//! Two kinds of problems exist. [`Error`] is fatal and returned through
//! [`Result`]: unreadable input, an unwritable output file, bad options.
//! [`Warning`] is a non-fatal structural finding collected while scraping;
//! the scrape keeps going and the warning ends up in
//! [`ScrapeResult::warnings`](crate::ScrapeResult::warnings).

/// Error type for scraping operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the page or writing the output failed.
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the album list failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// A configured URL is not an absolute http(s) URL.
    #[error("Invalid URL for {field}: {value:?}")]
    InvalidUrl {
        /// Name of the offending option.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An option value is out of range or empty.
    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

/// Result type alias for scraping operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Non-fatal finding recorded while locating or reading tables.
///
/// Table and row positions are zero-based. Row positions count every row of
/// the row group, header rows included.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Warning {
    /// The main-content container selector matched nothing.
    #[error("no element matches content selector {selector:?}")]
    NoContentContainer {
        /// The selector that was tried.
        selector: String,
    },

    /// No sub-heading carries the target anchor id.
    #[error("no sub-heading with anchor id {id:?}")]
    SectionNotFound {
        /// The anchor id that was searched for.
        id: String,
    },

    /// A table has no `tbody`; its direct rows were used instead.
    #[error("table {table}: no row group, reading direct rows")]
    MissingRowGroup {
        /// Table position.
        table: usize,
    },

    /// A data row has no second cell.
    #[error("table {table} row {row}: no info cell")]
    MissingInfoCell {
        /// Table position.
        table: usize,
        /// Row position.
        row: usize,
    },

    /// The title cell holds no link.
    #[error("table {table} row {row}: title cell has no link")]
    MissingAnchor {
        /// Table position.
        table: usize,
        /// Row position.
        row: usize,
    },

    /// The info cell holds no list.
    #[error("table {table} row {row}: info cell has no list")]
    MissingInfoList {
        /// Table position.
        table: usize,
        /// Row position.
        row: usize,
    },
}

/// Log a warning and keep it for the caller.
pub(crate) fn report(warnings: &mut Vec<Warning>, warning: Warning) {
    log::warn!("{warning}");
    warnings.push(warning);
}
