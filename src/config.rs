//! Runtime configuration.
//!
//! Values come from the environment, after loading a `.env` file when one
//! is present. Unparseable numbers are treated as unset.

use std::env;
use std::path::PathBuf;

/// Default location of the catalog seed file.
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "riflecraft=info";

/// Settings for the `riflecraft` front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CraftConfig {
    /// JSON catalog to serve (`RIFLECRAFT_CATALOG`).
    pub catalog_path: PathBuf,
    /// Fixed seed for elemental rolls (`RIFLECRAFT_SEED`).
    pub seed: Option<u64>,
    /// Tracing filter directive (`RIFLECRAFT_LOG`).
    pub log_filter: String,
}

impl Default for CraftConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl CraftConfig {
    /// Load `.env` (if any) and read settings from the process environment.
    pub fn from_env() -> Self {
        // A missing .env file is fine.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            catalog_path: lookup("RIFLECRAFT_CATALOG")
                .map(PathBuf::from)
                .unwrap_or(defaults.catalog_path),
            seed: lookup("RIFLECRAFT_SEED").and_then(|v| v.trim().parse().ok()),
            log_filter: lookup("RIFLECRAFT_LOG").unwrap_or(defaults.log_filter),
        }
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = CraftConfig::from_lookup(|_| None);
        assert_eq!(config, CraftConfig::default());
        assert_eq!(config.catalog_path, PathBuf::from("data/catalog.json"));
    }

    #[test]
    fn test_reads_all_keys() {
        let config = CraftConfig::from_lookup(lookup_from(&[
            ("RIFLECRAFT_CATALOG", "/srv/catalog.json"),
            ("RIFLECRAFT_SEED", " 1234 "),
            ("RIFLECRAFT_LOG", "riflecraft=debug"),
        ]));
        assert_eq!(config.catalog_path, PathBuf::from("/srv/catalog.json"));
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.log_filter, "riflecraft=debug");
    }

    #[test]
    fn test_bad_seed_is_unset() {
        let config = CraftConfig::from_lookup(lookup_from(&[("RIFLECRAFT_SEED", "soon")]));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builders_override() {
        let config = CraftConfig::default()
            .with_catalog_path("other.json")
            .with_seed(9);
        assert_eq!(config.catalog_path, PathBuf::from("other.json"));
        assert_eq!(config.seed, Some(9));
    }
}
