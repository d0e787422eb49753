// ABOUTME: Implements the Registry - an immutable, cheaply cloned list of tool
// ABOUTME: entries, and the RegistryBuilder that assembles one at startup.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use tracing::{info, warn};

use super::{CatalogFile, Category, ToolEntry, builtin};
use crate::search;

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::builder().entries(builtin::entries()).build()
});

/// A frozen registry of tool entries.
///
/// Entries keep the order they were added in. Nothing can be added,
/// changed, or removed after `build()`; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Arc<[ToolEntry]>,
}

impl Registry {
    /// The compiled-in registry, built once per process.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Create a new registry builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// All entries in registry order.
    pub fn entries(&self) -> &[ToolEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToolEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the first entry whose name matches, ignoring case.
    pub fn get(&self, name: &str) -> Option<&ToolEntry> {
        let name = name.trim().to_lowercase();
        self.entries
            .iter()
            .find(|e| e.name.to_lowercase() == name)
    }

    /// All entries in the given category, in registry order.
    pub fn entries_by_category(&self, category: Category) -> Vec<&ToolEntry> {
        search::entries_by_category(self, category)
    }

    /// Number of entries per category, in `Category::ALL` order.
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .iter()
            .map(|&c| (c, self.entries.iter().filter(|e| e.category == c).count()))
            .collect()
    }

    /// Search this registry. See [`search::search`].
    pub fn search(&self, query: &str, limit: usize) -> Vec<&ToolEntry> {
        search::search(self, query, limit)
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ToolEntry;
    type IntoIter = std::slice::Iter<'a, ToolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Collects entries for a [`Registry`].
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: Vec<ToolEntry>,
}

impl RegistryBuilder {
    /// Add one entry.
    pub fn entry(mut self, entry: ToolEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add several entries.
    pub fn entries(mut self, entries: impl IntoIterator<Item = ToolEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Add every entry of the built-in registry.
    pub fn with_builtin(self) -> Self {
        let builtin = Registry::builtin().entries().to_vec();
        self.entries(builtin)
    }

    /// Add the entries of a parsed catalog file.
    pub fn catalog(self, file: CatalogFile) -> Self {
        self.entries(file.entries)
    }

    /// Freeze the collected entries.
    pub fn build(self) -> Registry {
        let mut seen = HashSet::new();
        for entry in &self.entries {
            if !seen.insert(entry.name.to_lowercase()) {
                warn!(name = %entry.name, "Duplicate tool name in registry");
            }
        }

        info!(entries = self.entries.len(), "Registry built");

        Registry {
            entries: self.entries.into(),
        }
    }
}
