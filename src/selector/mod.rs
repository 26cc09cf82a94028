//! Selector Infrastructure
//!
//! Extraction rules are declarative: a CSS selector, where the value comes
//! from (text or an attribute), applied relative to a region of the page.
//! The site's concrete selectors live in [`site`].

use dom_query::Selection;

use crate::dom;

pub mod site;

/// Where a rule reads its value from once the element is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Whitespace-normalized text content.
    Text,
    /// A trimmed attribute value.
    Attr(&'static str),
}

/// A single optional field: first element matching `selector` inside a
/// region, read through `source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub selector: &'static str,
    pub source: Source,
}

impl FieldRule {
    #[must_use]
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector,
            source: Source::Text,
        }
    }

    #[must_use]
    pub const fn attr(selector: &'static str, name: &'static str) -> Self {
        Self {
            selector,
            source: Source::Attr(name),
        }
    }

    /// Apply the rule inside `region`.
    ///
    /// `None` when nothing matches, the attribute is absent, or the value is
    /// empty after trimming.
    #[must_use]
    pub fn apply(&self, region: &Selection) -> Option<String> {
        let element = dom::first(region, self.selector)?;
        let value = match self.source {
            Source::Text => dom::text(&element),
            Source::Attr(name) => dom::attr(&element, name)?.trim().to_string(),
        };
        (!value.is_empty()).then_some(value)
    }

    /// Apply the rule inside an optional region.
    #[must_use]
    pub fn apply_in(&self, region: Option<&Selection>) -> Option<String> {
        region.and_then(|r| self.apply(r))
    }
}
