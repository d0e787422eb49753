// ABOUTME: CatalogFile - a JSON document of extra tool entries that can be
// ABOUTME: merged into the built-in registry before it is frozen.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ToolEntry;
use crate::error::CatalogError;

/// A parsed catalog document.
///
/// ```json
/// { "entries": [ { "name": "Snake", "url": "/games/snake", "category": "Game" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub entries: Vec<ToolEntry>,
}

impl CatalogFile {
    /// Parse and validate a catalog from JSON text.
    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let mut file: CatalogFile = serde_json::from_str(content)?;
        file.validate()?;
        Ok(file)
    }

    /// Read, parse, and validate a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let file = Self::from_json(&content)?;
        debug!(path = %path.display(), entries = file.entries.len(), "Loaded catalog file");
        Ok(file)
    }

    fn validate(&mut self) -> Result<(), CatalogError> {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogError::InvalidEntry {
                    index,
                    reason: "name is empty".to_string(),
                });
            }
            if entry.url.trim().is_empty() {
                return Err(CatalogError::InvalidEntry {
                    index,
                    reason: format!("url is empty for '{}'", entry.name),
                });
            }

            let keywords = std::mem::take(&mut entry.keywords);
            entry.keywords = keywords
                .into_iter()
                .map(|k| k.trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect();
        }
        Ok(())
    }
}
