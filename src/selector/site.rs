//! Site Selectors
//!
//! The markup contract of one version of the site. Revise these when the
//! site changes.

use super::FieldRule;

// ============================================================
// LISTINGS (popular, latest, search)
// ============================================================

pub const LISTING_ROW: &str = "div#mangalist > ul.list > li";
pub const TITLE_ANCHOR: &str = "a.title";

/// An anchor that contains the "next" marker.
pub const NEXT_PAGE: &str = "a span.next";

// ============================================================
// DETAILS
// ============================================================

pub const INFO_BLOCK: &str = "div#title";
/// Second row of the info table; the first holds the column headings.
pub const INFO_ROW: &str = "table > tbody > tr:nth-child(2)";
pub const SIDE_INFO: &str = "#series_info";

pub const AUTHOR: FieldRule = FieldRule::text("td:nth-child(2)");
pub const ARTIST: FieldRule = FieldRule::text("td:nth-child(3)");
pub const GENRES: FieldRule = FieldRule::text("td:nth-child(4)");
pub const DESCRIPTION: FieldRule = FieldRule::text("p.summary");
pub const STATUS: FieldRule = FieldRule::text(".data");
pub const THUMBNAIL: FieldRule = FieldRule::attr("div.cover > img", "src");

// ============================================================
// CHAPTERS
// ============================================================

pub const CHAPTER_ROW: &str = "div#chapters li div";
/// The row holds several anchors; the chapter link carries the tooltip class.
pub const CHAPTER_LINK: &str = "a.tips";
pub const CHAPTER_DATE: &str = "span.date";

// ============================================================
// PAGES AND IMAGES
// ============================================================

pub const PAGE_SELECT: &str = "select.m";
pub const PAGE_OPTION: &str = "option";
/// Option value of the "comments" entry, not a page.
pub const PAGE_OPTION_SENTINEL: &str = "0";
pub const PAGE_SUFFIX: &str = ".html";

pub const PAGE_IMAGE: &str = "#image";
/// Substring of image URLs served through token-gated delivery.
pub const GATED_IMAGE_MARKER: &str = "compressed?token=";
