//! The site adapter.
//!
//! [`Mangafox`] ties the configured origin and headers to the request
//! builders and extractors. It holds no mutable state and can be shared
//! across threads.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone};
use dom_query::Document;
use url::Url;

use crate::error::Result;
use crate::extractor;
use crate::filters::{self, Filter};
use crate::options::{Options, DEFAULT_ORIGIN};
use crate::request::{self, QueryRequest};
use crate::result::{Chapter, ListingPage, MangaDetails, MangaEntry, Page};
use crate::url_utils;

/// Catalog source adapter for mangafox.
///
/// # Example
///
/// ```rust
/// use mangafox_source::{dom, Mangafox};
///
/// let source = Mangafox::new();
/// let request = source.build_popular_request(2)?;
/// assert_eq!(request.url.as_str(), "http://mangafox.me/directory/2.htm");
///
/// let doc = dom::parse(r#"<div id="mangalist"><ul class="list">
///     <li><a class="title" href="http://mangafox.me/manga/a/">Series A</a></li>
/// </ul></div>"#);
/// let page = source.extract_listing_page(&doc);
/// assert_eq!(page.entries[0].url, "/manga/a/");
/// assert!(!page.has_next_page);
/// # Ok::<(), mangafox_source::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Mangafox {
    options: Options,
    base_url: Url,
    headers: BTreeMap<String, String>,
}

impl Mangafox {
    /// Stable source identifier used by the host.
    pub const ID: i64 = 3;
    pub const NAME: &'static str = "Mangafox";
    pub const LANG: &'static str = "en";
    pub const SUPPORTS_LATEST: bool = true;

    /// Adapter for the live site with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Options::default(), DEFAULT_ORIGIN.clone())
    }

    /// Adapter with custom options. Fails if `base_url` is not a valid URL.
    pub fn with_options(options: Options) -> Result<Self> {
        let base_url = Url::parse(options.base_url.trim())?;
        Ok(Self::from_parts(options, base_url))
    }

    fn from_parts(options: Options, base_url: Url) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("User-Agent".to_string(), options.user_agent.clone());
        Self {
            options,
            base_url,
            headers,
        }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Headers attached to every built request.
    #[must_use]
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }

    /// Join a relative link from an extracted record with the site origin.
    pub fn absolute_url(&self, relative: &str) -> Result<Url> {
        url_utils::absolute_url(relative, &self.base_url)
    }

    // === Requests ===

    pub fn build_popular_request(&self, page: u32) -> Result<QueryRequest> {
        request::popular_request(&self.base_url, &self.headers, page)
    }

    pub fn build_latest_request(&self, page: u32) -> Result<QueryRequest> {
        request::latest_request(&self.base_url, &self.headers, page)
    }

    /// Search request. An empty `filters` slice applies [`Self::default_filters`].
    pub fn build_search_request(
        &self,
        page: u32,
        query: &str,
        filters: &[Filter],
    ) -> Result<QueryRequest> {
        request::search_request(&self.base_url, &self.headers, page, query, filters)
    }

    pub fn build_details_request(&self, manga_url: &str) -> Result<QueryRequest> {
        request::link_request(&self.base_url, &self.headers, manga_url)
    }

    /// The chapter list lives on the detail page.
    pub fn build_chapter_list_request(&self, manga_url: &str) -> Result<QueryRequest> {
        request::link_request(&self.base_url, &self.headers, manga_url)
    }

    pub fn build_page_list_request(&self, chapter_url: &str) -> Result<QueryRequest> {
        request::link_request(&self.base_url, &self.headers, chapter_url)
    }

    /// Request for an image or a page URL that is already absolute.
    pub fn build_image_request(&self, image_url: &str) -> Result<QueryRequest> {
        let url = Url::parse(image_url.trim())?;
        Ok(QueryRequest::new(url, &self.headers))
    }

    /// The full filter catalog in its default state.
    #[must_use]
    pub fn default_filters(&self) -> Vec<Filter> {
        filters::default_filters()
    }

    // === Extraction ===

    /// Rows of a popular, latest or search result page.
    #[must_use]
    pub fn extract_listing(&self, doc: &Document) -> Vec<MangaEntry> {
        extractor::extract_listing(doc, &self.base_url)
    }

    #[must_use]
    pub fn has_next_page(&self, doc: &Document) -> bool {
        extractor::has_next_page(doc)
    }

    #[must_use]
    pub fn extract_listing_page(&self, doc: &Document) -> ListingPage {
        extractor::extract_listing_page(doc, &self.base_url)
    }

    pub fn extract_details(&self, doc: &Document) -> Result<MangaDetails> {
        extractor::extract_details(doc)
    }

    #[must_use]
    pub fn extract_chapters(&self, doc: &Document) -> Vec<Chapter> {
        extractor::extract_chapters(doc, &self.base_url)
    }

    /// Chapter list with relative dates resolved against `now`.
    #[must_use]
    pub fn extract_chapters_at<Tz: TimeZone>(
        &self,
        doc: &Document,
        now: &DateTime<Tz>,
    ) -> Vec<Chapter> {
        extractor::extract_chapters_at(doc, &self.base_url, now)
    }

    /// Pages of the chapter shown by `doc`, fetched from `location`.
    pub fn resolve_pages(&self, doc: &Document, location: &str) -> Result<Vec<Page>> {
        extractor::resolve_pages(doc, location)
    }

    pub fn resolve_image(&self, doc: &Document) -> Result<String> {
        extractor::resolve_image(doc, &self.options.image_placeholder_url)
    }
}

impl Default for Mangafox {
    fn default() -> Self {
        Self::new()
    }
}
