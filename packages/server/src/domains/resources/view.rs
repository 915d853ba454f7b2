//! Filter, search and sort over the catalog.
//!
//! The view never touches the catalog itself: it borrows the entries and
//! returns a freshly ordered list of references.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domains::resources::error::InvalidSortMode;
use crate::domains::resources::models::{Category, Resource};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Featured first, then newest first
    #[default]
    Featured,
    /// Most liked first
    Popular,
    /// Newest first
    Newest,
}

impl std::fmt::Display for SortMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortMode::Featured => write!(f, "featured"),
            SortMode::Popular => write!(f, "popular"),
            SortMode::Newest => write!(f, "newest"),
        }
    }
}

impl std::str::FromStr for SortMode {
    type Err = InvalidSortMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(SortMode::Featured),
            "popular" => Ok(SortMode::Popular),
            "newest" => Ok(SortMode::Newest),
            _ => Err(InvalidSortMode(s.to_string())),
        }
    }
}

/// Current query/filter/sort state of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub query: String,
    /// Empty means every category passes
    pub categories: HashSet<Category>,
    pub sort: SortMode,
}

impl ViewQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    pub fn sorted_by(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }
}

/// Produce the ordered view for `query`.
///
/// Category filter first (any selected category matches), then the text
/// search, then a stable sort so ties keep catalog order.
pub fn apply_view<'a>(
    catalog: &'a [Resource],
    query: &ViewQuery,
    like_counts: &HashMap<String, u64>,
) -> Vec<&'a Resource> {
    let needle = query.query.to_lowercase();

    let mut view: Vec<&Resource> = catalog
        .iter()
        .filter(|r| query.categories.is_empty() || query.categories.contains(&r.category))
        .filter(|r| r.matches_query(&needle))
        .collect();

    let likes = |r: &Resource| like_counts.get(&r.id).copied().unwrap_or(0);

    view.sort_by(|a, b| match query.sort {
        SortMode::Featured => featured_first(a, b).then_with(|| newest_first(a, b)),
        SortMode::Popular => likes(b).cmp(&likes(a)),
        SortMode::Newest => newest_first(a, b),
    });

    view
}

fn featured_first(a: &Resource, b: &Resource) -> Ordering {
    b.is_featured.cmp(&a.is_featured)
}

fn newest_first(a: &Resource, b: &Resource) -> Ordering {
    b.added_at.cmp(&a.added_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_mode_parsing() {
        assert_eq!("popular".parse::<SortMode>().unwrap(), SortMode::Popular);
        assert_eq!("newest".parse::<SortMode>().unwrap(), SortMode::Newest);
        assert_eq!(SortMode::default(), SortMode::Featured);
        assert!("Popular".parse::<SortMode>().is_err());
    }

    #[test]
    fn test_view_query_builder() {
        let query = ViewQuery::new()
            .with_query("react")
            .with_category(Category::Framework)
            .sorted_by(SortMode::Newest);
        assert_eq!(query.query, "react");
        assert!(query.categories.contains(&Category::Framework));
        assert_eq!(query.sort, SortMode::Newest);
    }
}
