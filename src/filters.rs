//! Search filters.
//!
//! A closed set of filter kinds. Each one knows the single query parameter it
//! contributes to a search request (or that it contributes nothing). The
//! site's full set lives in [`FILTER_CATALOG`]; hosts render it, change
//! states, and hand back any subset.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Query parameter written by [`Filter::Order`].
pub const ORDER_PARAM: &str = "order";

/// State of a tri-state filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    #[default]
    Ignore,
    Include,
    Exclude,
}

impl TriState {
    /// Value the site's search form sends for this state, if any.
    #[must_use]
    pub fn query_value(self) -> Option<&'static str> {
        match self {
            Self::Ignore => None,
            Self::Include => Some("1"),
            Self::Exclude => Some("2"),
        }
    }
}

/// One entry of a choice filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub label: String,
    pub value: String,
}

impl ChoiceOption {
    fn new(label: &str, value: &str) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

/// A search filter and its current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Filter {
    /// Section label for the host's filter UI. Contributes nothing.
    Header { name: String },

    /// Include / exclude / ignore.
    TriState {
        name: String,
        key: String,
        state: TriState,
    },

    /// Free text. Empty text contributes nothing.
    Text {
        name: String,
        key: String,
        value: String,
    },

    /// One option out of a fixed list.
    Choice {
        name: String,
        key: String,
        options: Vec<ChoiceOption>,
        default_index: usize,
        selected: usize,
    },

    /// Ascending or descending sort direction.
    Order { name: String, ascending: bool },
}

impl Filter {
    #[must_use]
    pub fn header(name: &str) -> Self {
        Self::Header {
            name: name.to_string(),
        }
    }

    #[must_use]
    pub fn tri_state(name: &str, key: &str) -> Self {
        Self::TriState {
            name: name.to_string(),
            key: key.to_string(),
            state: TriState::Ignore,
        }
    }

    /// Genre tri-state keyed `genres[<name>]`.
    #[must_use]
    pub fn genre(name: &str) -> Self {
        Self::tri_state(name, &format!("genres[{name}]"))
    }

    #[must_use]
    pub fn text(name: &str, key: &str) -> Self {
        Self::Text {
            name: name.to_string(),
            key: key.to_string(),
            value: String::new(),
        }
    }

    #[must_use]
    pub fn choice(name: &str, key: &str, options: &[(&str, &str)], default_index: usize) -> Self {
        Self::Choice {
            name: name.to_string(),
            key: key.to_string(),
            options: options
                .iter()
                .map(|(label, value)| ChoiceOption::new(label, value))
                .collect(),
            default_index,
            selected: default_index,
        }
    }

    #[must_use]
    pub fn order() -> Self {
        Self::Order {
            name: "Ascending order".to_string(),
            ascending: false,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Header { name }
            | Self::TriState { name, .. }
            | Self::Text { name, .. }
            | Self::Choice { name, .. }
            | Self::Order { name, .. } => name,
        }
    }

    /// Identity of the filter within the catalog: its query parameter, or
    /// the name for headers.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Header { name } => name,
            Self::TriState { key, .. } | Self::Text { key, .. } | Self::Choice { key, .. } => key,
            Self::Order { .. } => ORDER_PARAM,
        }
    }

    /// The query parameter this filter adds, if any.
    ///
    /// A choice whose selection is out of range falls back to its default
    /// option.
    #[must_use]
    pub fn query_param(&self) -> Option<(&str, &str)> {
        match self {
            Self::Header { .. } => None,
            Self::TriState { key, state, .. } => state.query_value().map(|v| (key.as_str(), v)),
            Self::Text { key, value, .. } => {
                (!value.is_empty()).then_some((key.as_str(), value.as_str()))
            }
            Self::Choice {
                key,
                options,
                default_index,
                selected,
                ..
            } => options
                .get(*selected)
                .or_else(|| options.get(*default_index))
                .map(|option| (key.as_str(), option.value.as_str())),
            Self::Order { ascending, .. } => {
                Some((ORDER_PARAM, if *ascending { "az" } else { "za" }))
            }
        }
    }

    /// Set a tri-state filter's state. Other kinds are returned unchanged.
    #[must_use]
    pub fn with_state(mut self, new_state: TriState) -> Self {
        if let Self::TriState { state, .. } = &mut self {
            *state = new_state;
        }
        self
    }

    /// Set a text filter's value. Other kinds are returned unchanged.
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        if let Self::Text { value, .. } = &mut self {
            *value = text.to_string();
        }
        self
    }

    /// Select a choice filter's option by index. Other kinds are returned
    /// unchanged.
    #[must_use]
    pub fn with_selected(mut self, index: usize) -> Self {
        if let Self::Choice { selected, .. } = &mut self {
            *selected = index;
        }
        self
    }

    /// Set the order toggle's direction. Other kinds are returned unchanged.
    #[must_use]
    pub fn with_ascending(mut self, value: bool) -> Self {
        if let Self::Order { ascending, .. } = &mut self {
            *ascending = value;
        }
        self
    }
}

/// Genres offered by the site's advanced search, in form order.
pub const GENRES: &[&str] = &[
    "Action",
    "Adult",
    "Adventure",
    "Comedy",
    "Doujinshi",
    "Drama",
    "Ecchi",
    "Fantasy",
    "Gender Bender",
    "Harem",
    "Historical",
    "Horror",
    "Josei",
    "Martial Arts",
    "Mature",
    "Mecha",
    "Mystery",
    "One Shot",
    "Psychological",
    "Romance",
    "School Life",
    "Sci-fi",
    "Seinen",
    "Shoujo",
    "Shoujo Ai",
    "Shounen",
    "Shounen Ai",
    "Slice of Life",
    "Smut",
    "Sports",
    "Supernatural",
    "Tragedy",
    "Webtoons",
    "Yaoi",
    "Yuri",
];

/// Every filter the site understands, in the order they are applied.
pub static FILTER_CATALOG: LazyLock<Vec<Filter>> = LazyLock::new(|| {
    let mut filters = vec![
        Filter::text("Author", "author"),
        Filter::text("Artist", "artist"),
        Filter::choice(
            "Type",
            "type",
            &[
                ("Any", ""),
                ("Japanese Manga", "1"),
                ("Korean Manhwa", "2"),
                ("Chinese Manhua", "3"),
            ],
            0,
        ),
        Filter::tri_state("Completed", "is_completed"),
        Filter::choice(
            "Order by",
            "sort",
            &[
                ("Series name", "name"),
                ("Rating", "rating"),
                ("Views", "views"),
                ("Total chapters", "total_chapters"),
                ("Last chapter", "last_chapter_time"),
            ],
            2,
        ),
        Filter::order(),
        Filter::header("Genres"),
    ];
    filters.extend(GENRES.iter().copied().map(Filter::genre));
    filters
});

/// A fresh copy of the catalog with default states.
#[must_use]
pub fn default_filters() -> Vec<Filter> {
    FILTER_CATALOG.clone()
}

/// The catalog entry with the given key, in its default state.
#[must_use]
pub fn default_filter(key: &str) -> Option<Filter> {
    FILTER_CATALOG.iter().find(|f| f.key() == key).cloned()
}

/// Position of a filter in the catalog, matched by key.
#[must_use]
pub fn catalog_position(filter: &Filter) -> Option<usize> {
    FILTER_CATALOG.iter().position(|f| f.key() == filter.key())
}

/// Order caller-supplied filters the way the catalog does.
///
/// The sort is stable; filters the catalog does not know keep their
/// relative order after the known ones.
#[must_use]
pub fn in_catalog_order(filters: &[Filter]) -> Vec<&Filter> {
    let mut ordered: Vec<&Filter> = filters.iter().collect();
    ordered.sort_by_key(|f| catalog_position(f).unwrap_or(usize::MAX));
    ordered
}
