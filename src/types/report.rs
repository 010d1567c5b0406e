//! Match report returned by the analyzer

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Category;

/// Matches for one category, entries in catalog declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryMatches {
    pub category: Category,
    pub entries: Vec<&'static str>,
}

/// Ordered category → matched-entries mapping produced by the analyzer.
///
/// Categories with no matches are omitted entirely; the rest appear in
/// `Category::DISPLAY_ORDER`. Serializes as a JSON object keyed by category
/// display name, preserving that order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchReport {
    categories: Vec<CategoryMatches>,
}

impl MatchReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a category's matches. Empty lists are dropped so that absence
    /// of a key, not an empty list, signals "nothing found". Callers push
    /// categories in display order.
    pub fn push(&mut self, category: Category, entries: Vec<&'static str>) {
        if !entries.is_empty() {
            self.categories.push(CategoryMatches { category, entries });
        }
    }

    /// True when no category matched.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of categories with at least one match.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Matched entries for a category, if it matched at all.
    pub fn entries(&self, category: Category) -> Option<&[&'static str]> {
        self.categories
            .iter()
            .find(|c| c.category == category)
            .map(|c| c.entries.as_slice())
    }

    /// Iterate matched categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryMatches> {
        self.categories.iter()
    }
}

impl Serialize for MatchReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for matches in &self.categories {
            map.serialize_entry(matches.category.name(), &matches.entries)?;
        }
        map.end()
    }
}
