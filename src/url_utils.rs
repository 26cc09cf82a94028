//! URL Utility Functions
//!
//! Link normalization shared by the extractors and the request builder:
//! stripping the origin from site links, re-joining stored links with the
//! base origin, and taking the directory of a page URL.

use url::Url;

use crate::error::Result;

/// Strip scheme and host from a link, keeping path, query and fragment.
///
/// Relative links are first resolved against `base`, so `"/manga/a"` and
/// `"http://mangafox.me/manga/a"` both become `"/manga/a"`.
///
/// # Examples
/// ```
/// use mangafox_source::url_utils::url_without_domain;
/// use url::Url;
///
/// let base = Url::parse("http://mangafox.me")?;
/// assert_eq!(url_without_domain("http://mangafox.me/manga/a/", &base), "/manga/a/");
/// assert_eq!(url_without_domain("/manga/a/?p=1#top", &base), "/manga/a/?p=1#top");
/// # Ok::<(), url::ParseError>(())
/// ```
#[must_use]
pub fn url_without_domain(href: &str, base: &Url) -> String {
    let href = href.trim();

    let Ok(resolved) = base.join(href) else {
        return href.to_string();
    };

    let mut out = resolved.path().to_string();
    if let Some(query) = resolved.query() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = resolved.fragment() {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

/// Join a stored relative link with the base origin.
pub fn absolute_url(relative: &str, base: &Url) -> Result<Url> {
    Ok(base.join(relative.trim())?)
}

/// Everything before the last `/` of a URL.
///
/// Used to derive sibling page URLs from the current page's location; the
/// whole string is returned when it has no `/`.
///
/// # Examples
/// ```
/// use mangafox_source::url_utils::parent_directory;
///
/// assert_eq!(
///     parent_directory("http://mangafox.me/manga/a/v01/c001/1.html"),
///     "http://mangafox.me/manga/a/v01/c001"
/// );
/// ```
#[must_use]
pub fn parent_directory(url: &str) -> &str {
    url.rfind('/').map_or(url, |idx| &url[..idx])
}
