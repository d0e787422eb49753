// ABOUTME: Tests for SearchQuery - default limit, custom limits, and scopes.
// ABOUTME: Runs queries against the built-in registry.

use super::*;
use crate::catalog::{Category, Registry};

#[test]
fn test_query_matches_free_function() {
    let registry = Registry::builtin();
    let query = SearchQuery::new("interest").limit(5);
    assert_eq!(query.run(registry), search(registry, "interest", 5));
}

#[test]
fn test_query_default_limit_caps_results() {
    let registry = Registry::builtin();
    let results = SearchQuery::new("calculator").run(registry);
    assert_eq!(results.len(), DEFAULT_LIMIT);
}

#[test]
fn test_query_with_category_scope() {
    let registry = Registry::builtin();
    let scope = SearchScope::new().categories(Some(vec![Category::App]));
    let results = SearchQuery::new("random").scope(scope).run(registry);

    assert!(!results.is_empty());
    assert!(results.iter().all(|e| e.category == Category::App));
}

#[test]
fn test_query_with_deny_scope() {
    let registry = Registry::builtin();
    let scope = SearchScope::new().deny("BMI Calculator");
    let results = SearchQuery::new("bmi").scope(scope).run(registry);

    assert!(results.iter().all(|e| e.name != "BMI Calculator"));
}

#[test]
fn test_query_scored_exposes_scores() {
    let registry = Registry::builtin();
    let hits = SearchQuery::new("snake").run_scored(registry);
    assert_eq!(hits[0].entry.name, "Snake");
    // exact name 100 + word 25 + keyword exact 40
    assert_eq!(hits[0].score, 165);
}
