// ABOUTME: Defines all error types for the toolcat library using thiserror.
// ABOUTME: Each concern has its own error enum, unified under ToolcatError.

/// Top-level error type for the toolcat library.
#[derive(Debug, thiserror::Error)]
pub enum ToolcatError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors from building or loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid entry at index {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },

    #[error("Invalid name pattern: {0}")]
    InvalidPattern(#[from] glob::PatternError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors from reading runtime configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid result limit '{0}': expected a positive integer")]
    InvalidLimit(String),
}
