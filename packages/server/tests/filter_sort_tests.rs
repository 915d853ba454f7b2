//! Integration tests for the filtered, searched and sorted catalog view.

mod common;

use std::collections::HashMap;

use common::{react_and_css_catalog, resource};
use directory_core::domains::resources::{apply_view, Category, Resource, SortMode, ViewQuery};

fn ids<'a>(view: &[&'a Resource]) -> Vec<&'a str> {
    view.iter().map(|r| r.id.as_str()).collect()
}

fn counts(pairs: &[(&str, u64)]) -> HashMap<String, u64> {
    pairs.iter().map(|(id, n)| (id.to_string(), *n)).collect()
}

#[test]
fn featured_default_puts_featured_first() {
    let catalog = react_and_css_catalog();
    let view = apply_view(&catalog, &ViewQuery::new(), &HashMap::new());
    assert_eq!(ids(&view), vec!["b", "a"]);
}

#[test]
fn query_narrows_to_matching_entries() {
    let catalog = react_and_css_catalog();
    let view = apply_view(&catalog, &ViewQuery::new().with_query("react"), &HashMap::new());
    assert_eq!(ids(&view), vec!["a"]);
}

#[test]
fn popular_orders_by_like_count() {
    let catalog = react_and_css_catalog();
    let query = ViewQuery::new().sorted_by(SortMode::Popular);
    let view = apply_view(&catalog, &query, &counts(&[("a", 2), ("b", 9)]));
    assert_eq!(ids(&view), vec!["b", "a"]);
}

#[test]
fn popular_ties_keep_catalog_order() {
    let catalog = vec![
        resource("A", "Alpha").build(),
        resource("B", "Beta").build(),
        resource("C", "Gamma").build(),
    ];
    let query = ViewQuery::new().sorted_by(SortMode::Popular);
    let view = apply_view(&catalog, &query, &counts(&[("A", 5), ("B", 5), ("C", 10)]));
    assert_eq!(ids(&view), vec!["C", "A", "B"]);
}

#[test]
fn popular_treats_missing_counts_as_zero() {
    let catalog = vec![
        resource("none", "No likes").build(),
        resource("one", "One like").build(),
    ];
    let query = ViewQuery::new().sorted_by(SortMode::Popular);
    let view = apply_view(&catalog, &query, &counts(&[("one", 1)]));
    assert_eq!(ids(&view), vec!["one", "none"]);
}

#[test]
fn featured_ties_keep_catalog_order() {
    let catalog = vec![
        resource("first", "First").added_on("2024-03-01").build(),
        resource("second", "Second").added_on("2024-03-01").build(),
        resource("older", "Older").added_on("2023-12-31").build(),
    ];
    let view = apply_view(&catalog, &ViewQuery::new(), &HashMap::new());
    assert_eq!(ids(&view), vec!["first", "second", "older"]);
}

#[test]
fn featured_then_newest_within_groups() {
    let catalog = vec![
        resource("old-plain", "Old plain").added_on("2023-01-01").build(),
        resource("old-featured", "Old featured").added_on("2023-01-01").featured().build(),
        resource("new-plain", "New plain").added_on("2024-05-01").build(),
        resource("new-featured", "New featured").added_on("2024-05-01").featured().build(),
    ];
    let view = apply_view(&catalog, &ViewQuery::new(), &HashMap::new());
    assert_eq!(
        ids(&view),
        vec!["new-featured", "old-featured", "new-plain", "old-plain"]
    );
}

#[test]
fn newest_ignores_featured_flag() {
    let catalog = react_and_css_catalog();
    let query = ViewQuery::new().sorted_by(SortMode::Newest);
    let view = apply_view(&catalog, &query, &HashMap::new());
    assert_eq!(ids(&view), vec!["b", "a"]);

    let catalog = vec![
        resource("featured-old", "Featured old").added_on("2020-01-01").featured().build(),
        resource("plain-new", "Plain new").added_on("2024-01-01").build(),
    ];
    let view = apply_view(&catalog, &query, &HashMap::new());
    assert_eq!(ids(&view), vec!["plain-new", "featured-old"]);
}

#[test]
fn category_filter_is_any_of() {
    let catalog = vec![
        resource("css", "CSS thing").category("CSS").build(),
        resource("test", "Test thing").category("Testing").build(),
        resource("tool", "Tool thing").category("Tool").build(),
    ];
    let query = ViewQuery::new()
        .with_category(Category::Css)
        .with_category(Category::Testing)
        .sorted_by(SortMode::Popular);
    let view = apply_view(&catalog, &query, &HashMap::new());
    assert_eq!(ids(&view), vec!["css", "test"]);
}

#[test]
fn category_and_query_combine() {
    let catalog = vec![
        resource("css-grid", "Grid guide").category("CSS").tags(&["layout"]).build(),
        resource("css-color", "Color tool").category("CSS").build(),
        resource("layout-lib", "Layout lib").category("UI Library").build(),
    ];
    let query = ViewQuery::new()
        .with_category(Category::Css)
        .with_query("LAYOUT");
    let view = apply_view(&catalog, &query, &HashMap::new());
    assert_eq!(ids(&view), vec!["css-grid"]);
}

#[test]
fn view_leaves_catalog_untouched() {
    let catalog = react_and_css_catalog();
    let before = catalog.clone();
    let query = ViewQuery::new().sorted_by(SortMode::Popular);
    let _ = apply_view(&catalog, &query, &counts(&[("a", 100)]));
    assert_eq!(catalog, before);
}
