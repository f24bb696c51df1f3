//! Result types for scraping output.
//!
//! This module defines the album record written to the output file and the
//! wrapper returned by the top-level scrape functions.

use serde::{Deserialize, Serialize};

use crate::error::Warning;

/// One studio album, read from one table row.
///
/// Every field is optional: a row whose markup lacks a link or a list item
/// still produces a record, just with fewer fields. Absent fields are left
/// out of the JSON form entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    /// Absolute link to the album's own page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Canonical album title, from the link's `title` attribute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Release date as written on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,

    /// Recording date and place as written on the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded: Option<String>,

    /// Record label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Info-list fields an [`Album`] can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlbumField {
    /// [`Album::released`]
    Released,
    /// [`Album::recorded`]
    Recorded,
    /// [`Album::label`]
    Label,
}

impl Album {
    /// Store a value in the given info-list field, replacing any earlier one.
    pub fn set(&mut self, field: AlbumField, value: String) {
        let slot = match field {
            AlbumField::Released => &mut self.released,
            AlbumField::Recorded => &mut self.recorded,
            AlbumField::Label => &mut self.label,
        };
        *slot = Some(value);
    }

    /// Read an info-list field.
    #[must_use]
    pub fn get(&self, field: AlbumField) -> Option<&str> {
        match field {
            AlbumField::Released => self.released.as_deref(),
            AlbumField::Recorded => self.recorded.as_deref(),
            AlbumField::Label => self.label.as_deref(),
        }
    }

    /// True when not a single field could be read.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.id.is_none()
            && self.released.is_none()
            && self.recorded.is_none()
            && self.label.is_none()
    }
}

/// Result of scraping one discography page.
#[derive(Debug, Clone, Default)]
pub struct ScrapeResult {
    /// Album records in page order.
    pub albums: Vec<Album>,

    /// Structural problems met along the way.
    ///
    /// None of these stopped the scrape; they explain missing records or
    /// missing fields.
    pub warnings: Vec<Warning>,

    /// Number of tables found in the target subsection.
    pub tables: usize,

    /// Page URL from the options, if one was given.
    pub source_url: Option<String>,
}
