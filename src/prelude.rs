// ABOUTME: Prelude module - convenient imports for common use cases.
// ABOUTME: Use `use toolcat::prelude::*;` to get started quickly.

pub use crate::catalog::{CatalogFile, Category, Registry, RegistryBuilder, ToolEntry};
pub use crate::error::{CatalogError, ConfigError, ToolcatError};
pub use crate::search::{
    DEFAULT_LIMIT, SearchHit, SearchQuery, SearchScope, entries_by_category, normalize_query,
    score, search, search_scored,
};
