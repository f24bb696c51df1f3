//! Page sources and album sinks.
//!
//! Rendering and fetching the page happen outside this crate; a
//! [`PageSource`] only hands over the markup. An [`AlbumSink`] receives the
//! finished album list. [`run`] wires one to the other.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::encoding::transcode_to_utf8;
use crate::error::Result;
use crate::options::Options;
use crate::result::{Album, ScrapeResult};

/// Supplies the HTML of one rendered page.
pub trait PageSource {
    /// Read the page markup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when the page cannot be read.
    fn read_page(&mut self) -> Result<String>;
}

/// Consumes the album list of one page.
pub trait AlbumSink {
    /// Store the albums. Called once per page.
    ///
    /// # Errors
    ///
    /// Returns an error when the albums cannot be serialized or stored.
    fn write_albums(&mut self, albums: &[Album]) -> Result<()>;
}

/// A page saved to disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Source reading the page at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl PageSource for FileSource {
    fn read_page(&mut self) -> Result<String> {
        let bytes = fs::read(&self.path)?;
        log::debug!("read {} bytes from {}", bytes.len(), self.path.display());
        Ok(transcode_to_utf8(&bytes))
    }
}

/// A page streamed from any reader, such as stdin.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// Source draining `reader`.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: Read> PageSource for ReaderSource<R> {
    fn read_page(&mut self) -> Result<String> {
        let mut bytes = Vec::new();
        self.reader.read_to_end(&mut bytes)?;
        Ok(transcode_to_utf8(&bytes))
    }
}

/// Serialize albums as a JSON array.
///
/// # Errors
///
/// Returns [`Error::Json`](crate::Error::Json) if serialization fails.
pub fn albums_to_json(albums: &[Album], pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(albums)?
    } else {
        serde_json::to_string(albums)?
    };
    Ok(json)
}

/// Writes the album list to a JSON file in one go.
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    pretty: bool,
}

impl JsonFileSink {
    /// Sink writing compact JSON to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    /// Sink configured from `output_path` and `pretty_json`.
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self {
            path: options.output_path.clone(),
            pretty: options.pretty_json,
        }
    }

    /// Indent the output.
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Output file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AlbumSink for JsonFileSink {
    fn write_albums(&mut self, albums: &[Album]) -> Result<()> {
        let json = albums_to_json(albums, self.pretty)?;
        fs::write(&self.path, json)?;
        log::info!("wrote {} album(s) to {}", albums.len(), self.path.display());
        Ok(())
    }
}

/// Read a page, scrape it and hand the albums to the sink.
///
/// Source and sink failures are fatal; structural problems in the page end
/// up in the returned warnings.
///
/// # Errors
///
/// Returns the first error from the source, the options check or the sink.
pub fn run(
    source: &mut dyn PageSource,
    sink: &mut dyn AlbumSink,
    options: &Options,
) -> Result<ScrapeResult> {
    let html = source.read_page()?;
    let result = crate::scrape_with_options(&html, options)?;
    sink.write_albums(&result.albums)?;
    Ok(result)
}
