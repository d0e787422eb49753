// ABOUTME: Runtime configuration read from the environment (and .env via dotenvy).
// ABOUTME: Locates an optional JSON catalog file to merge into the registry.

use std::path::PathBuf;

use toolcat::prelude::*;

pub const ENV_LIMIT: &str = "TOOLCAT_LIMIT";
pub const ENV_CATALOG: &str = "TOOLCAT_CATALOG";
pub const ENV_CATEGORIES: &str = "TOOLCAT_CATEGORIES";

const CATALOG_FILE_NAME: &str = ".toolcat.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub limit: usize,
    pub catalog: Option<PathBuf>,
    pub categories: Option<Vec<Category>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            catalog: None,
            categories: None,
        }
    }
}

impl Config {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ToolcatError> {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        if config.catalog.is_none() {
            let search_dirs: Vec<PathBuf> = std::env::current_dir()
                .ok()
                .into_iter()
                .chain(dirs::home_dir())
                .collect();
            config.catalog = find_catalog_in(&search_dirs);
        }
        Ok(config)
    }

    /// Read configuration through `lookup`. Does not search the filesystem.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ToolcatError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_LIMIT) {
            config.limit = match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidLimit(raw).into()),
            };
        }

        if let Some(path) = lookup(ENV_CATALOG).filter(|p| !p.trim().is_empty()) {
            config.catalog = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_CATEGORIES) {
            let categories = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::parse::<Category>)
                .collect::<Result<Vec<_>, _>>()?;
            if !categories.is_empty() {
                config.categories = Some(categories);
            }
        }

        Ok(config)
    }

    /// Scope implied by this configuration.
    pub fn scope(&self) -> SearchScope {
        SearchScope::new().categories(self.categories.clone())
    }
}

/// First `.toolcat.json` found in `search_dirs`, tried in order.
///
/// `from_env` passes the current directory, then the home directory.
pub fn find_catalog_in(search_dirs: &[PathBuf]) -> Option<PathBuf> {
    search_dirs
        .iter()
        .map(|dir| dir.join(CATALOG_FILE_NAME))
        .find(|path| path.is_file())
}

/// Build the registry: built-in entries plus the configured catalog file, if any.
pub fn load_registry(config: &Config) -> Result<Registry, ToolcatError> {
    let mut builder = Registry::builder().with_builtin();
    if let Some(path) = &config.catalog {
        builder = builder.catalog(CatalogFile::load(path)?);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_limit_and_categories() {
        let config = Config::from_lookup(lookup(&[
            (ENV_LIMIT, "3"),
            (ENV_CATEGORIES, "games, apps"),
        ]))
        .unwrap();

        assert_eq!(config.limit, 3);
        assert_eq!(config.categories, Some(vec![Category::Game, Category::App]));
    }

    #[test]
    fn test_invalid_limit() {
        for raw in ["0", "-1", "ten"] {
            let err = Config::from_lookup(lookup(&[(ENV_LIMIT, raw)])).unwrap_err();
            assert!(matches!(err, ToolcatError::Config(ConfigError::InvalidLimit(_))));
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = Config::from_lookup(lookup(&[(ENV_CATEGORIES, "games,widgets")])).unwrap_err();
        assert!(matches!(
            err,
            ToolcatError::Catalog(CatalogError::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_find_catalog_prefers_first_dir() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        std::fs::write(cwd.path().join(CATALOG_FILE_NAME), "{}").unwrap();
        std::fs::write(home.path().join(CATALOG_FILE_NAME), "{}").unwrap();

        let found = find_catalog_in(&[cwd.path().to_path_buf(), home.path().to_path_buf()]);
        assert_eq!(found, Some(cwd.path().join(CATALOG_FILE_NAME)));
    }

    #[test]
    fn test_find_catalog_falls_back_to_home() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        std::fs::write(home.path().join(CATALOG_FILE_NAME), "{}").unwrap();

        let found = find_catalog_in(&[cwd.path().to_path_buf(), home.path().to_path_buf()]);
        assert_eq!(found, Some(home.path().join(CATALOG_FILE_NAME)));
    }

    #[test]
    fn test_find_catalog_none_found() {
        let cwd = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();

        let found = find_catalog_in(&[cwd.path().to_path_buf(), home.path().to_path_buf()]);
        assert_eq!(found, None);

        let config = Config {
            catalog: found,
            ..Config::default()
        };
        let registry = load_registry(&config).unwrap();
        assert_eq!(registry.len(), Registry::builtin().len());
    }

    #[test]
    fn test_find_catalog_ignores_directory_with_catalog_name() {
        let cwd = tempfile::tempdir().unwrap();
        std::fs::create_dir(cwd.path().join(CATALOG_FILE_NAME)).unwrap();

        assert_eq!(find_catalog_in(&[cwd.path().to_path_buf()]), None);
    }

    #[test]
    fn test_load_registry_with_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extra.json");
        std::fs::write(
            &path,
            r#"{"entries": [{"name": "Dice Roller", "url": "/apps/dice", "category": "App"}]}"#,
        )
        .unwrap();

        let config = Config::from_lookup(lookup(&[(ENV_CATALOG, path.to_str().unwrap())])).unwrap();
        let registry = load_registry(&config).unwrap();

        assert!(registry.get("Dice Roller").is_some());
        assert_eq!(registry.len(), Registry::builtin().len() + 1);
    }

    #[test]
    fn test_load_registry_missing_catalog() {
        let config = Config {
            catalog: Some(PathBuf::from("/nonexistent/toolcat.json")),
            ..Config::default()
        };
        assert!(load_registry(&config).is_err());
    }
}
