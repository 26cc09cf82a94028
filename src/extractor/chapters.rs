//! Chapter list extraction.

use chrono::{DateTime, Local, TimeZone};
use dom_query::{Document, Selection};
use tracing::{debug, trace};
use url::Url;

use crate::date::{self, UNKNOWN_DATE};
use crate::dom;
use crate::result::Chapter;
use crate::selector::site;
use crate::url_utils;

/// Extract the chapter list, dating relative phrases against the local clock.
#[must_use]
pub fn extract_chapters(doc: &Document, base: &Url) -> Vec<Chapter> {
    extract_chapters_at(doc, base, &Local::now())
}

/// Extract the chapter list, dating relative phrases against `now`.
///
/// Rows keep document order (the site lists newest first). Rows without a
/// chapter link are skipped; rows without a readable date get
/// [`UNKNOWN_DATE`].
#[must_use]
pub fn extract_chapters_at<Tz: TimeZone>(
    doc: &Document,
    base: &Url,
    now: &DateTime<Tz>,
) -> Vec<Chapter> {
    let rows = doc.select(site::CHAPTER_ROW);
    let mut chapters = Vec::with_capacity(rows.length());

    for (position, node) in rows.nodes().iter().enumerate() {
        let row = Selection::from(*node);
        match chapter_from_row(&row, base, now) {
            Some(chapter) => chapters.push(chapter),
            None => debug!(position, selector = site::CHAPTER_LINK, "skipping chapter row"),
        }
    }

    trace!(rows = rows.length(), count = chapters.len(), "extracted chapters");
    chapters
}

fn chapter_from_row<Tz: TimeZone>(
    row: &Selection,
    base: &Url,
    now: &DateTime<Tz>,
) -> Option<Chapter> {
    let link = dom::first(row, site::CHAPTER_LINK)?;
    let href = dom::attr(&link, "href").filter(|href| !href.trim().is_empty())?;

    let date_upload = dom::first(row, site::CHAPTER_DATE)
        .map(|span| dom::text(&span))
        .map_or(UNKNOWN_DATE, |text| date::parse_chapter_date_at(&text, now));

    Some(Chapter {
        url: url_utils::url_without_domain(&href, base),
        name: dom::text(&link),
        date_upload,
    })
}
