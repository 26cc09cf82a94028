//! Page list and page image extraction.
//!
//! A chapter page carries a `<select>` with one option per page. The option
//! values are file names relative to the current page's directory, so the
//! page list is derived from where the document was fetched.

use dom_query::{Document, Selection};
use tracing::{debug, trace};

use crate::dom;
use crate::error::{Error, Result};
use crate::result::Page;
use crate::selector::site;
use crate::url_utils;

/// Resolve every page of the chapter displayed by `doc`.
///
/// `location` is the URL the document was fetched from; a `<base href>` in
/// the document overrides it. Each page URL is the location's directory plus
/// `/{value}.html`. The sentinel option `0` and options without a value are
/// skipped; indexes are assigned densely from zero in document order.
///
/// The directory is everything before the last `/` of the full URL. A query
/// string is not stripped first, so a `/` inside it moves the cut.
pub fn resolve_pages(doc: &Document, location: &str) -> Result<Vec<Page>> {
    let select =
        dom::first_in(doc, site::PAGE_SELECT).ok_or_else(|| Error::missing(site::PAGE_SELECT))?;

    let base = dom::base_uri(doc, location)?;
    let directory = url_utils::parent_directory(base.as_str());

    let pages: Vec<Page> = dom::all(&select, site::PAGE_OPTION)
        .iter()
        .filter_map(page_value)
        .enumerate()
        .map(|(index, value)| Page {
            index,
            url: format!("{directory}/{value}{}", site::PAGE_SUFFIX),
        })
        .collect();

    trace!(%base, count = pages.len(), "resolved pages");
    Ok(pages)
}

fn page_value(option: &Selection) -> Option<String> {
    let value = dom::attr(option, "value")?.trim().to_string();
    if value.is_empty() || value == site::PAGE_OPTION_SENTINEL {
        return None;
    }
    Some(value)
}

/// Resolve the image shown on a single page.
///
/// Images behind token-gated delivery cannot be fetched by this adapter, so
/// `placeholder` is returned instead.
pub fn resolve_image(doc: &Document, placeholder: &str) -> Result<String> {
    let src = dom::first_in(doc, site::PAGE_IMAGE)
        .and_then(|image| dom::attr(&image, "src"))
        .map(|src| src.trim().to_string())
        .filter(|src| !src.is_empty())
        .ok_or_else(|| Error::missing(site::PAGE_IMAGE))?;

    if src.contains(site::GATED_IMAGE_MARKER) {
        debug!(src = %src, "gated image replaced with placeholder");
        return Ok(placeholder.to_string());
    }
    Ok(src)
}
