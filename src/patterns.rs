//! Markers and markup constants for reading discography tables.
//!
//! The info cell of a studio-album row is a bullet list such as
//!
//! ```html
//! <ul>
//!   <li>Released: 14 April 1980</li>
//!   <li>Recorded: January 1980 at Kingsway Studios</li>
//!   <li>Label: <a href="/wiki/EMI" title="EMI">EMI</a></li>
//! </ul>
//! ```
//!
//! Each list item is matched against [`FIELD_MARKERS`]. Adding a new field
//! means adding a row here and a variant to [`AlbumField`].

use crate::result::AlbumField;

/// One row of the marker table: which list items feed which field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMarker {
    /// Substring that identifies the list item.
    pub marker: &'static str,
    /// Leading text removed from the item to get the value.
    pub prefix: &'static str,
    /// Field the value is stored in.
    pub field: AlbumField,
    /// Prefer the text of a link directly after the marker text.
    pub prefers_link: bool,
}

/// Marker table applied to every list item of an info cell.
///
/// Every matching row is applied, in order.
pub const FIELD_MARKERS: &[FieldMarker] = &[
    FieldMarker {
        marker: "Released",
        prefix: "Released: ",
        field: AlbumField::Released,
        prefers_link: false,
    },
    FieldMarker {
        marker: "Recorded",
        prefix: "Recorded: ",
        field: AlbumField::Recorded,
        prefers_link: false,
    },
    FieldMarker {
        marker: "Label",
        prefix: "Label: ",
        field: AlbumField::Label,
        prefers_link: true,
    },
];

/// Class shared by heading wrappers in current MediaWiki output.
pub const HEADING_WRAPPER_CLASS: &str = "mw-heading";

/// Tag of the section tables that are kept.
pub const TABLE_TAG: &str = "table";

/// Tag of a table's row group.
pub const ROW_GROUP_TAG: &str = "tbody";

/// Tag of data cells; header cells (`th`) never make a row qualify.
pub const DATA_CELL_TAG: &str = "td";

/// Attribute that marks a cell as spanning several columns.
pub const COLSPAN_ATTR: &str = "colspan";

/// Heading level for a tag name: `h1` is 1, `h6` is 6.
#[must_use]
pub fn heading_level_of_tag(tag: &str) -> Option<u8> {
    let bytes = tag.as_bytes();
    match bytes {
        [b'h' | b'H', digit @ b'1'..=b'6'] => Some(digit - b'0'),
        _ => None,
    }
}
