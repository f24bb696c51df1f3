//! Table extractor.
//!
//! Turns the rows of studio-album tables into [`Album`] records. A data row
//! looks like this (whitespace between tags omitted):
//!
//! ```html
//! <tr>
//!   <th scope="row"><i><a href="/wiki/Killers_(album)" title="Killers (album)">Killers</a></i></th>
//!   <td><ul><li>Released: 2 February 1981</li><li>Label: <a href="/wiki/EMI">EMI</a></li></ul></td>
//!   <td>12</td> <!-- chart positions and certifications follow -->
//! </tr>
//! ```
//!
//! Only the first two cells are read. Rows without a plain data cell are
//! dividers and produce nothing; rows with missing pieces still produce a
//! partial record.

use crate::dom::{self, NodeRef, StrTendril};
use crate::error::{report, Warning};
use crate::options::Options;
use crate::patterns::{COLSPAN_ATTR, DATA_CELL_TAG, FIELD_MARKERS, ROW_GROUP_TAG};
use crate::result::Album;
use crate::url_utils::join_href;

/// Position of a row, for warnings.
#[derive(Debug, Clone, Copy)]
struct RowPos {
    table: usize,
    row: usize,
}

/// Album records from the given tables, in table then row order.
///
/// Structural problems are logged and otherwise ignored.
#[must_use]
pub fn extract_albums(tables: &[NodeRef], options: &Options) -> Vec<Album> {
    let mut warnings = Vec::new();
    extract_albums_reporting(tables, options, &mut warnings)
}

/// Same as [`extract_albums`], also recording warnings.
pub fn extract_albums_reporting(
    tables: &[NodeRef],
    options: &Options,
    warnings: &mut Vec<Warning>,
) -> Vec<Album> {
    let mut albums = Vec::new();

    for (table_idx, table) in tables.iter().enumerate() {
        let rows = table_rows(table, table_idx, warnings);

        for (row_idx, row) in rows.iter().enumerate().skip(options.header_rows) {
            if !has_row_data(row) {
                log::debug!("table {table_idx} row {row_idx}: divider, skipped");
                continue;
            }

            let pos = RowPos {
                table: table_idx,
                row: row_idx,
            };
            albums.push(album_from_row(row, pos, options, warnings));
        }
    }

    albums
}

/// Rows of a table's row group, falling back to the table's own children.
fn table_rows<'a>(table: &NodeRef<'a>, table_idx: usize, warnings: &mut Vec<Warning>) -> Vec<NodeRef<'a>> {
    if let Some(body) = dom::find_real_child(table, ROW_GROUP_TAG) {
        dom::real_children(&body)
    } else {
        report(warnings, Warning::MissingRowGroup { table: table_idx });
        dom::real_children(table)
    }
}

/// A row carries data when at least one `td` does not span columns.
///
/// Header-only rows (all `th`) and divider rows (every `td` spanning)
/// fail this test.
#[must_use]
pub fn has_row_data(row: &NodeRef) -> bool {
    dom::real_children(row)
        .iter()
        .any(|cell| dom::is_tag(cell, DATA_CELL_TAG) && !dom::has_attribute(cell, COLSPAN_ATTR))
}

fn album_from_row(row: &NodeRef, pos: RowPos, options: &Options, warnings: &mut Vec<Warning>) -> Album {
    let mut album = Album::default();

    // has_row_data guarantees at least one cell
    if let Some(title_cell) = dom::first_real_child(row) {
        if !read_title_cell(&title_cell, &options.base_url, &mut album) {
            report(
                warnings,
                Warning::MissingAnchor {
                    table: pos.table,
                    row: pos.row,
                },
            );
        }
    }

    match dom::nth_real_child(row, 1) {
        Some(info_cell) => {
            if !read_info_cell(&info_cell, &mut album) {
                report(
                    warnings,
                    Warning::MissingInfoList {
                        table: pos.table,
                        row: pos.row,
                    },
                );
            }
        }
        None => report(
            warnings,
            Warning::MissingInfoCell {
                table: pos.table,
                row: pos.row,
            },
        ),
    }

    album
}

/// Read `url` and `id` from the first link in the cell.
///
/// Returns `false` when the cell holds no link at all. Empty attributes
/// count as missing.
fn read_title_cell(cell: &NodeRef, base_url: &str, album: &mut Album) -> bool {
    let Some(link) = dom::first_descendant(cell, "a") else {
        return false;
    };

    album.url = non_empty_attr(&link, "href").map(|href| join_href(base_url, &href));
    album.id = non_empty_attr(&link, "title").map(|title| title.to_string());
    true
}

fn non_empty_attr(node: &NodeRef, name: &str) -> Option<StrTendril> {
    dom::get_attribute(node, name).filter(|v| !v.is_empty())
}

/// Read the info list of the cell into the album.
///
/// Returns `false` when the cell holds no list.
fn read_info_cell(cell: &NodeRef, album: &mut Album) -> bool {
    let Some(list) = dom::first_descendant(cell, "ul") else {
        return false;
    };

    for item in dom::real_children(&list) {
        if dom::is_tag(&item, "li") {
            read_list_item(&item, album);
        }
    }
    true
}

/// Apply the marker table to the leading text of one list item.
///
/// Items that do not start with text, or whose text matches no marker,
/// leave the album untouched.
fn read_list_item(item: &NodeRef, album: &mut Album) {
    let Some(lead) = item.first_child() else {
        return;
    };
    let Some(text) = dom::text_data(&lead) else {
        return;
    };

    for marker in FIELD_MARKERS.iter().filter(|m| text.contains(m.marker)) {
        let linked = if marker.prefers_link {
            linked_text(&lead)
        } else {
            None
        };
        let value = linked.unwrap_or_else(|| text.replacen(marker.prefix, "", 1));
        album.set(marker.field, value);
    }
}

/// Text of a link placed right after `lead`, as in `Label: <a>EMI</a>`.
fn linked_text(lead: &NodeRef) -> Option<String> {
    let link = lead.next_sibling().filter(|n| dom::is_tag(n, "a"))?;
    let inner = link.first_child()?;
    dom::text_data(&inner)
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
}
