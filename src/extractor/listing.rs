//! Listing extraction.
//!
//! Popular, latest and search results share one markup shape, so one
//! extractor serves all three.

use dom_query::{Document, Selection};
use tracing::{debug, trace};
use url::Url;

use crate::dom;
use crate::result::{ListingPage, MangaEntry};
use crate::selector::site;
use crate::url_utils;

/// Extract every listing row that has a title anchor, in document order.
///
/// Rows without an anchor (or whose anchor has no `href`) are decorative and
/// skipped.
#[must_use]
pub fn extract_listing(doc: &Document, base: &Url) -> Vec<MangaEntry> {
    let rows = doc.select(site::LISTING_ROW);
    let mut entries = Vec::with_capacity(rows.length());

    for (position, node) in rows.nodes().iter().enumerate() {
        let row = Selection::from(*node);
        match entry_from_row(&row, base) {
            Some(entry) => entries.push(entry),
            None => debug!(position, selector = site::TITLE_ANCHOR, "skipping listing row"),
        }
    }

    trace!(rows = rows.length(), count = entries.len(), "extracted listing");
    entries
}

fn entry_from_row(row: &Selection, base: &Url) -> Option<MangaEntry> {
    let anchor = dom::first(row, site::TITLE_ANCHOR)?;
    let href = dom::attr(&anchor, "href").filter(|href| !href.trim().is_empty())?;

    Some(MangaEntry {
        url: url_utils::url_without_domain(&href, base),
        title: dom::text(&anchor),
    })
}

/// Whether the page has a "next" control.
///
/// A presence test; a first or only page without the control is simply
/// `false`.
#[must_use]
pub fn has_next_page(doc: &Document) -> bool {
    doc.select(site::NEXT_PAGE).exists()
}

/// Listing entries together with the pagination flag.
#[must_use]
pub fn extract_listing_page(doc: &Document, base: &Url) -> ListingPage {
    ListingPage {
        entries: extract_listing(doc, base),
        has_next_page: has_next_page(doc),
    }
}
