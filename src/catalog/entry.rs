// ABOUTME: Defines ToolEntry and Category - the descriptor for one tool page
// ABOUTME: and the closed set of page kinds it can belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The kind of page a tool entry points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Calculator,
    Game,
    App,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 3] = [Category::Calculator, Category::Game, Category::App];

    /// Display name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Calculator => "Calculator",
            Category::Game => "Game",
            Category::App => "App",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Parses a category name case-insensitively. Plural forms are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calculator" | "calculators" => Ok(Category::Calculator),
            "game" | "games" => Ok(Category::Game),
            "app" | "apps" => Ok(Category::App),
            _ => Err(CatalogError::UnknownCategory(s.to_string())),
        }
    }
}

/// A static descriptor for one calculator, game, or app page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Display name, expected to be unique within a registry.
    pub name: String,

    /// Relative path of the page.
    pub url: String,

    pub category: Category,

    /// Lowercase tags used only for matching.
    #[serde(default)]
    pub keywords: Vec<String>,

    /// Display glyph. Opaque to search.
    #[serde(default)]
    pub icon: String,
}

impl ToolEntry {
    /// Create an entry with no keywords and no icon.
    pub fn new(name: impl Into<String>, url: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            category,
            keywords: Vec::new(),
            icon: String::new(),
        }
    }

    /// Set the keyword list. Keywords are trimmed and lowercased; blanks are dropped.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        self
    }

    /// Set the display icon.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}
