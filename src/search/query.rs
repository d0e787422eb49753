// ABOUTME: SearchQuery - builder for a search with a limit and an optional scope.
// ABOUTME: Runs against any registry; the default limit is DEFAULT_LIMIT.

use super::{DEFAULT_LIMIT, SearchHit, SearchScope, rank};
use crate::catalog::{Registry, ToolEntry};

/// A search request.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    text: String,
    limit: usize,
    scope: Option<SearchScope>,
}

impl SearchQuery {
    /// Create a query with the default limit and no scope.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            limit: DEFAULT_LIMIT,
            scope: None,
        }
    }

    /// Set the maximum number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Restrict the candidate entries.
    pub fn scope(mut self, scope: SearchScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// Run the query, keeping scores.
    pub fn run_scored<'r>(&self, registry: &'r Registry) -> Vec<SearchHit<'r>> {
        match &self.scope {
            Some(scope) => rank(scope.entries(registry), &self.text, self.limit),
            None => rank(registry.iter(), &self.text, self.limit),
        }
    }

    /// Run the query.
    pub fn run<'r>(&self, registry: &'r Registry) -> Vec<&'r ToolEntry> {
        self.run_scored(registry)
            .into_iter()
            .map(|hit| hit.entry)
            .collect()
    }
}
