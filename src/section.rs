//! Section locator.
//!
//! A discography article is a flat run of siblings inside the content
//! container: lead paragraphs and infobox, then headings, each followed by
//! the tables and notes of its section. This module finds the tables that
//! sit under one sub-heading (by default "Studio albums").
//!
//! Two generations of MediaWiki heading markup are recognised:
//!
//! ```html
//! <!-- older: anchor id on an inner span -->
//! <h3><span class="mw-headline" id="Studio_albums">Studio albums</span></h3>
//!
//! <!-- current: heading wrapped in a div, id on the heading itself -->
//! <div class="mw-heading mw-heading3"><h3 id="Studio_albums">Studio albums</h3></div>
//! ```

use crate::dom::{self, Document, NodeRef};
use crate::error::{report, Warning};
use crate::options::Options;
use crate::patterns::{heading_level_of_tag, HEADING_WRAPPER_CLASS, TABLE_TAG};

/// A heading found among the container's children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    /// 1 for `h1` through 6 for `h6`.
    pub level: u8,
    /// Anchor id the heading links to, if any.
    pub anchor: Option<String>,
}

/// Where the scan stands relative to the target subsection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Target sub-heading not seen yet.
    Before,
    /// Between the target sub-heading and the next heading that closes it.
    InsideTarget,
    /// Target subsection closed. Nothing further is collected.
    AfterTarget,
}

impl ScanState {
    /// Transition for one sibling.
    ///
    /// `heading` is `None` for anything that is not a heading. Headings
    /// deeper than `subsection_level` stay inside the subsection; a heading
    /// at `subsection_level` or above closes it.
    #[must_use]
    pub fn next(self, heading: Option<&Heading>, target_id: &str, subsection_level: u8) -> Self {
        match (self, heading) {
            (Self::AfterTarget, _) => Self::AfterTarget,
            (state, None) => state,
            (Self::Before, Some(h)) => {
                if h.level == subsection_level && h.anchor.as_deref() == Some(target_id) {
                    Self::InsideTarget
                } else {
                    Self::Before
                }
            }
            (Self::InsideTarget, Some(h)) => {
                if h.level <= subsection_level {
                    Self::AfterTarget
                } else {
                    Self::InsideTarget
                }
            }
        }
    }
}

/// Recognise a heading, bare or wrapped.
#[must_use]
pub fn classify_heading(node: &NodeRef) -> Option<Heading> {
    let tag = dom::tag_name(node)?;

    if let Some(level) = heading_level_of_tag(&tag) {
        return Some(Heading {
            level,
            anchor: heading_anchor(node),
        });
    }

    if &*tag == "div" && dom::has_class(node, HEADING_WRAPPER_CLASS) {
        return dom::real_children(node).iter().find_map(|child| {
            let level = dom::tag_name(child).and_then(|t| heading_level_of_tag(&t))?;
            Some(Heading {
                level,
                anchor: heading_anchor(child),
            })
        });
    }

    None
}

/// Anchor id of a heading element.
///
/// Older markup carries the id on the first inner element
/// (`span.mw-headline`); newer markup on the heading itself. A heading with
/// neither has no anchor and never matches a target.
fn heading_anchor(heading: &NodeRef) -> Option<String> {
    dom::first_real_child(heading)
        .and_then(|child| dom::id(&child))
        .or_else(|| dom::id(heading))
        .map(|id| id.to_string())
}

/// Index of the first sibling after the lead.
///
/// The lead ends at the first heading of `boundary_level`. Without such a
/// heading nothing is skipped.
#[must_use]
pub fn lead_end(siblings: &[NodeRef], boundary_level: u8) -> usize {
    siblings
        .iter()
        .position(|node| classify_heading(node).is_some_and(|h| h.level == boundary_level))
        .map_or(0, |i| i + 1)
}

/// Siblings belonging to the target subsection.
#[derive(Debug, Clone, Default)]
pub struct SectionSpan<'a> {
    /// Nodes between the opening heading and the closing one, exclusive.
    pub nodes: Vec<NodeRef<'a>>,
    /// The target heading was seen.
    pub found: bool,
    /// A later heading closed the subsection. When `false` the span runs to
    /// the end of the container.
    pub closed: bool,
}

/// Collect the siblings between the target sub-heading and the heading that
/// closes it. The headings themselves are not part of the span.
#[must_use]
pub fn scan_section<'a>(
    siblings: &[NodeRef<'a>],
    target_id: &str,
    subsection_level: u8,
) -> SectionSpan<'a> {
    let mut state = ScanState::Before;
    let mut nodes = Vec::new();

    for node in siblings {
        let heading = classify_heading(node);
        let next = state.next(heading.as_ref(), target_id, subsection_level);

        if state == ScanState::InsideTarget && next == ScanState::InsideTarget {
            nodes.push(*node);
        }

        state = next;
        if state == ScanState::AfterTarget {
            break;
        }
    }

    SectionSpan {
        nodes,
        found: state != ScanState::Before,
        closed: state == ScanState::AfterTarget,
    }
}

/// Tables of the target subsection, in document order.
///
/// Structural problems (no container, no matching sub-heading) are logged
/// and yield an empty list.
#[must_use]
pub fn locate_studio_album_tables<'a>(document: &'a Document, options: &Options) -> Vec<NodeRef<'a>> {
    let mut warnings = Vec::new();
    locate_tables_reporting(document, options, &mut warnings)
}

/// Same as [`locate_studio_album_tables`], also recording warnings.
pub fn locate_tables_reporting<'a>(
    document: &'a Document,
    options: &Options,
    warnings: &mut Vec<Warning>,
) -> Vec<NodeRef<'a>> {
    let Some(container) = dom::first_match(document, &options.content_selector) else {
        report(
            warnings,
            Warning::NoContentContainer {
                selector: options.content_selector.clone(),
            },
        );
        return Vec::new();
    };

    let siblings = dom::real_children(&container);
    let start = lead_end(&siblings, options.boundary_heading_level);
    log::debug!(
        "content container has {} children, lead ends at {start}",
        siblings.len()
    );

    let mut span = scan_section(
        &siblings[start..],
        &options.section_id,
        options.subsection_heading_level,
    );

    if !span.found {
        report(
            warnings,
            Warning::SectionNotFound {
                id: options.section_id.clone(),
            },
        );
        return Vec::new();
    }

    // The closing heading is never part of the span, so only an unclosed
    // span has a trailer to drop.
    if options.drop_trailing_node && !span.closed {
        if let Some(last) = span.nodes.pop() {
            log::debug!("dropped trailing <{}>", dom::tag_name(&last).unwrap_or_default());
        }
    }

    let tables: Vec<_> = span
        .nodes
        .into_iter()
        .filter(|node| dom::is_tag(node, TABLE_TAG))
        .collect();

    log::debug!(
        "section {:?} holds {} table(s)",
        options.section_id,
        tables.len()
    );

    tables
}
