//! Records produced by the extractors.
//!
//! Links stored in these records are relative to the site origin (path plus
//! optional query and fragment). Join them with
//! [`crate::Mangafox::absolute_url`] before fetching.

use serde::{Deserialize, Serialize};

/// One row of a popular, latest or search listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaEntry {
    /// Link to the manga page, without scheme and host.
    pub url: String,

    /// Display title.
    pub title: String,
}

/// A listing page together with its pagination state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingPage {
    /// Entries in document order. Duplicates are passed through.
    pub entries: Vec<MangaEntry>,

    /// Whether a "next" control was present.
    pub has_next_page: bool,
}

/// Publication status of a manga.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MangaStatus {
    Ongoing,
    Completed,
    #[default]
    Unknown,
}

impl MangaStatus {
    /// Classify the side-info status text.
    ///
    /// Substring test: the keyword is surrounded by other text on the page.
    /// "Ongoing" is checked first.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if text.contains("Ongoing") {
            Self::Ongoing
        } else if text.contains("Completed") {
            Self::Completed
        } else {
            Self::Unknown
        }
    }
}

/// Details of a single manga.
///
/// Every field except `status` is optional; items without an artist or a
/// cover are normal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MangaDetails {
    pub author: Option<String>,
    pub artist: Option<String>,
    /// Comma-separated genre list as shown on the page.
    pub genres: Option<String>,
    pub description: Option<String>,
    pub status: MangaStatus,
    pub thumbnail_url: Option<String>,
}

/// One chapter of a manga.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    /// Link to the chapter's first page, without scheme and host.
    pub url: String,

    /// Display name.
    pub name: String,

    /// Upload date as epoch milliseconds at local midnight.
    ///
    /// `0` means the date was missing or unparseable.
    pub date_upload: i64,
}

/// One page of a chapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Zero-based position within the chapter, dense and in document order.
    pub index: usize,

    /// Absolute URL of the HTML page that displays the image.
    pub url: String,
}
