//! Extractors, one per page type.
//!
//! # Module Structure
//!
//! - `listing`: popular / latest / search result rows and pagination
//! - `details`: a manga's detail page
//! - `chapters`: a manga's chapter list
//! - `pages`: a chapter's page list and a page's image
//!
//! Every extractor is a pure function of the document (plus the base URL or
//! the document location where links are involved). Multi-row extractors
//! skip rows they cannot read; single-subject extractors fail with
//! [`crate::Error::MissingElement`] when the subject itself is absent.

pub mod chapters;
pub mod details;
pub mod listing;
pub mod pages;

pub use chapters::{extract_chapters, extract_chapters_at};
pub use details::extract_details;
pub use listing::{extract_listing, extract_listing_page, has_next_page};
pub use pages::{resolve_image, resolve_pages};
