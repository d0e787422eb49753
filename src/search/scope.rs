// ABOUTME: SearchScope - restricts which registry entries a search may return.
// ABOUTME: Category allowlist plus name denylist (exact names and glob patterns).

use crate::catalog::{Category, Registry, ToolEntry};
use crate::error::CatalogError;

/// A filtered view of a registry's entries.
///
/// Denials take precedence over the category allowlist.
#[derive(Debug, Clone, Default)]
pub struct SearchScope {
    categories: Option<Vec<Category>>,
    denied_names: Vec<String>,
    denied_patterns: Vec<glob::Pattern>,
}

impl SearchScope {
    /// A scope that allows every entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the category allowlist. If None, all categories are allowed.
    pub fn categories(mut self, categories: Option<Vec<Category>>) -> Self {
        self.categories = categories;
        self
    }

    /// Exclude an entry by name, ignoring case.
    pub fn deny(mut self, name: impl AsRef<str>) -> Self {
        self.denied_names.push(name.as_ref().trim().to_lowercase());
        self
    }

    /// Exclude entries whose lowercased name matches a glob pattern.
    pub fn deny_pattern(mut self, pattern: &str) -> Result<Self, CatalogError> {
        let pattern = glob::Pattern::new(&pattern.to_lowercase())?;
        self.denied_patterns.push(pattern);
        Ok(self)
    }

    /// Check if an entry passes the scope.
    pub fn is_allowed(&self, entry: &ToolEntry) -> bool {
        let name = entry.name.to_lowercase();

        // Denylist always wins
        if self.denied_names.iter().any(|d| *d == name) {
            return false;
        }
        if self.denied_patterns.iter().any(|p| p.matches(&name)) {
            return false;
        }

        match &self.categories {
            None => true,
            Some(allowed) => allowed.contains(&entry.category),
        }
    }

    /// Entries of `registry` that pass the scope, in registry order.
    pub fn entries<'r>(&self, registry: &'r Registry) -> impl Iterator<Item = &'r ToolEntry> {
        registry.iter().filter(move |e| self.is_allowed(e))
    }
}
