//! # mangafox-source
//!
//! Catalog source adapter for mangafox: turns fetched HTML documents into
//! typed records and builds the outgoing listing and search requests.
//!
//! The adapter performs no I/O. The host fetches a page (usually with a
//! [`QueryRequest`] built here), parses it with [`dom::parse`], and hands the
//! document to the matching extractor.
//!
//! ## Quick Start
//!
//! ```rust
//! use mangafox_source::{dom, Filter, Mangafox, TriState};
//!
//! let source = Mangafox::new();
//!
//! let filters = vec![Filter::genre("Comedy").with_state(TriState::Include)];
//! let request = source.build_search_request(1, "hero", &filters)?;
//! assert!(request.url.as_str().contains("genres%5BComedy%5D=1"));
//!
//! let html = r#"<div id="title"><p class="summary">A hero for fun.</p></div>
//!     <div id="series_info"><div class="data">Completed</div></div>"#;
//! let details = source.extract_details(&dom::parse(html))?;
//! assert_eq!(details.description.as_deref(), Some("A hero for fun."));
//! # Ok::<(), mangafox_source::Error>(())
//! ```
//!
//! ## Failure model
//!
//! - Missing optional fields, unparseable dates and gated images degrade to
//!   `None`, `0` and a placeholder URL respectively.
//! - Listing and chapter rows that cannot be read are skipped.
//! - Single-subject pages (details, page list, image) fail with
//!   [`Error::MissingElement`] when the subject is absent.

mod error;
mod patterns;
mod result;
mod source;

/// Configuration options.
pub mod options;

/// DOM helpers over `dom_query`.
pub mod dom;

/// Declarative field rules and the site's selectors.
pub mod selector;

/// Chapter date normalization.
pub mod date;

/// Search filters and the site's filter catalog.
pub mod filters;

/// Outgoing request construction.
pub mod request;

/// Extractors for listings, details, chapters, pages and images.
pub mod extractor;

/// URL utilities for link normalization.
pub mod url_utils;

// Public API - re-exports
pub use error::{Error, Result};
pub use filters::{default_filters, ChoiceOption, Filter, TriState};
pub use options::Options;
pub use request::QueryRequest;
pub use result::{Chapter, ListingPage, MangaDetails, MangaEntry, MangaStatus, Page};
pub use source::Mangafox;
