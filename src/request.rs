//! Outgoing request construction.
//!
//! Builds the URLs for the site's directory (popular / latest) and advanced
//! search. The directory uses a path suffix for pages after the first while
//! search always sends a `page` parameter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;
use url::Url;

use crate::error::{Error, Result};
use crate::filters::{self, Filter};

/// Fixed search path and the always-present search mode flags.
pub const SEARCH_PATH: &str =
    "/search.php?name_method=cw&author_method=cw&artist_method=cw&advopts=1";

/// Directory listing path (popular and latest).
pub const DIRECTORY_PATH: &str = "/directory/";

/// Bare query flag that switches the directory to latest updates.
pub const LATEST_QUERY: &str = "latest";

/// A request ready for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub url: Url,
    pub headers: BTreeMap<String, String>,
}

impl QueryRequest {
    #[must_use]
    pub fn new(url: Url, headers: &BTreeMap<String, String>) -> Self {
        Self {
            url,
            headers: headers.clone(),
        }
    }
}

fn check_page(page: u32) -> Result<()> {
    if page == 0 {
        return Err(Error::InvalidPage(page));
    }
    Ok(())
}

/// `/directory/` for page 1, `/directory/{page}.htm` after that.
fn directory_url(base: &Url, page: u32) -> Result<Url> {
    check_page(page)?;
    let directory = base.join(DIRECTORY_PATH)?;
    if page == 1 {
        Ok(directory)
    } else {
        Ok(directory.join(&format!("{page}.htm"))?)
    }
}

/// Request for the popular directory page.
pub fn popular_request(
    base: &Url,
    headers: &BTreeMap<String, String>,
    page: u32,
) -> Result<QueryRequest> {
    let url = directory_url(base, page)?;
    trace!(%url, page, "built popular request");
    Ok(QueryRequest::new(url, headers))
}

/// Request for the latest-updates directory page.
pub fn latest_request(
    base: &Url,
    headers: &BTreeMap<String, String>,
    page: u32,
) -> Result<QueryRequest> {
    let mut url = directory_url(base, page)?;
    url.set_query(Some(LATEST_QUERY));
    trace!(%url, page, "built latest request");
    Ok(QueryRequest::new(url, headers))
}

/// Request for an advanced search page.
///
/// Parameters, in order: the fixed search flags, `name`, one parameter per
/// contributing filter in catalog order, `page`. An empty `filters` slice
/// means the full catalog in its default state.
pub fn search_request(
    base: &Url,
    headers: &BTreeMap<String, String>,
    page: u32,
    query: &str,
    filters: &[Filter],
) -> Result<QueryRequest> {
    check_page(page)?;
    let mut url = base.join(SEARCH_PATH)?;

    let applied: Vec<&Filter> = if filters.is_empty() {
        filters::FILTER_CATALOG.iter().collect()
    } else {
        filters::in_catalog_order(filters)
    };

    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("name", query);
        for (key, value) in applied.iter().filter_map(|f| f.query_param()) {
            pairs.append_pair(key, value);
        }
        pairs.append_pair("page", &page.to_string());
    }

    trace!(%url, page, filters = applied.len(), "built search request");
    Ok(QueryRequest::new(url, headers))
}

/// Request for a link stored in an extracted record.
pub fn link_request(
    base: &Url,
    headers: &BTreeMap<String, String>,
    relative: &str,
) -> Result<QueryRequest> {
    let url = crate::url_utils::absolute_url(relative, base)?;
    Ok(QueryRequest::new(url, headers))
}
