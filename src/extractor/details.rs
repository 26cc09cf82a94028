//! Detail page extraction.
//!
//! Three regions: the info block (title table and summary), the metadata row
//! inside it, and the side info block (status and cover). Only the info
//! block is required; every field is read independently.

use dom_query::Document;
use tracing::debug;

use crate::dom;
use crate::error::{Error, Result};
use crate::result::{MangaDetails, MangaStatus};
use crate::selector::site;

/// Extract a manga's details.
///
/// Fails only when the info block is absent, which means the document is
/// not a detail page.
pub fn extract_details(doc: &Document) -> Result<MangaDetails> {
    let info =
        dom::first_in(doc, site::INFO_BLOCK).ok_or_else(|| Error::missing(site::INFO_BLOCK))?;
    let row = dom::first(&info, site::INFO_ROW);
    let side = dom::first_in(doc, site::SIDE_INFO);

    if row.is_none() {
        debug!(selector = site::INFO_ROW, "detail page has no metadata row");
    }
    if side.is_none() {
        debug!(selector = site::SIDE_INFO, "detail page has no side info block");
    }

    let status_text = site::STATUS.apply_in(side.as_ref()).unwrap_or_default();

    Ok(MangaDetails {
        author: site::AUTHOR.apply_in(row.as_ref()),
        artist: site::ARTIST.apply_in(row.as_ref()),
        genres: site::GENRES.apply_in(row.as_ref()),
        description: site::DESCRIPTION.apply(&info),
        status: MangaStatus::classify(&status_text),
        thumbnail_url: site::THUMBNAIL.apply_in(side.as_ref()),
    })
}
