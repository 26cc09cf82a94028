//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate. Extractors go through these so
//! that "first match", "normalized text" and "attribute or nothing" mean the
//! same thing everywhere.

pub use dom_query::{Document, Selection};

use url::Url;

use crate::error::Result;
use crate::patterns;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// First element matching `selector` below `sel`, if any.
#[must_use]
pub fn first<'a>(sel: &Selection<'a>, selector: &str) -> Option<Selection<'a>> {
    sel.select(selector).nodes().first().map(|node| Selection::from(*node))
}

/// First element matching `selector` anywhere in the document, if any.
#[must_use]
pub fn first_in<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    doc.select(selector).nodes().first().map(|node| Selection::from(*node))
}

/// Every element matching `selector` below `sel`, in document order.
#[must_use]
pub fn all<'a>(sel: &Selection<'a>, selector: &str) -> Vec<Selection<'a>> {
    sel.select(selector)
        .nodes()
        .iter()
        .map(|node| Selection::from(*node))
        .collect()
}

/// Text of the element and its descendants, whitespace-collapsed and trimmed.
#[must_use]
pub fn text(sel: &Selection) -> String {
    patterns::collapse_whitespace(&sel.text())
}

/// Attribute value of the first node in the selection.
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Base URI of a document fetched from `location`.
///
/// A `<base href>` element overrides the location; a relative `href` is
/// resolved against it. A base element that does not resolve is ignored.
pub fn base_uri(doc: &Document, location: &str) -> Result<Url> {
    let location = Url::parse(location.trim())?;

    let base = first_in(doc, "base[href]")
        .and_then(|base| attr(&base, "href"))
        .and_then(|href| location.join(href.trim()).ok());

    Ok(base.unwrap_or(location))
}
