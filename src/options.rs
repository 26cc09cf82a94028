//! Configuration options for the adapter.
//!
//! The `Options` struct carries the few site values a host may need to
//! override (a mirror origin, a different user agent). Everything else about
//! the site's markup is fixed in [`crate::selector`].

use std::sync::LazyLock;

use url::Url;

/// Default site origin.
pub const DEFAULT_BASE_URL: &str = "http://mangafox.me";

/// [`DEFAULT_BASE_URL`], parsed once on first use.
#[allow(clippy::expect_used)]
pub static DEFAULT_ORIGIN: LazyLock<Url> =
    LazyLock::new(|| Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL url"));

/// Default `User-Agent` header sent with every request.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.3; WOW64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/56.0.2924.87 Safari/537.36";

/// Image returned in place of token-gated page images.
pub const DEFAULT_IMAGE_PLACEHOLDER_URL: &str = "http://mangafox.me/media/logo.png";

/// Configuration options for the adapter.
///
/// All fields are public. Use `Default::default()` for the live site.
///
/// # Example
///
/// ```rust
/// use mangafox_source::Options;
///
/// let options = Options {
///     base_url: "https://fanfox.net".to_string(),
///     ..Options::default()
/// };
/// assert_eq!(options.user_agent, mangafox_source::options::DEFAULT_USER_AGENT);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Site origin every relative link is joined with.
    ///
    /// Default: `http://mangafox.me`
    pub base_url: String,

    /// `User-Agent` header attached to built requests.
    ///
    /// Default: a desktop Chrome user agent
    pub user_agent: String,

    /// URL returned by the image resolver when the page image sits behind
    /// token-gated delivery.
    ///
    /// Default: `http://mangafox.me/media/logo.png`
    pub image_placeholder_url: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            image_placeholder_url: DEFAULT_IMAGE_PLACEHOLDER_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = Options::default();

        assert_eq!(opts.base_url, "http://mangafox.me");
        assert!(opts.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(opts.image_placeholder_url, "http://mangafox.me/media/logo.png");
    }

    #[test]
    fn test_override_single_field() {
        let opts = Options {
            base_url: "https://mirror.example".to_string(),
            ..Options::default()
        };

        assert_eq!(opts.base_url, "https://mirror.example");
        assert_eq!(opts.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(opts.image_placeholder_url, DEFAULT_IMAGE_PLACEHOLDER_URL);
    }

    #[test]
    fn test_default_origin_matches_base_url() {
        assert_eq!(DEFAULT_ORIGIN.scheme(), "http");
        assert_eq!(DEFAULT_ORIGIN.host_str(), Some("mangafox.me"));
        assert_eq!(DEFAULT_ORIGIN.as_str(), format!("{DEFAULT_BASE_URL}/"));
    }
}
