use crate::error::{Result, ScaffoldError};
use dashmap::DashMap;
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Prefix of every variable the starters read.
pub const ENV_PREFIX: &str = "SCAFFOLD_";

/// Configuration service
///
/// A shared key/value store seeded from the process environment.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::from_pairs(env::vars())
    }

    /// Seed the store from explicit pairs instead of the environment
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let service = Self::default();
        for (key, value) in pairs {
            service.config.insert(key.into(), value.into());
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn get_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    /// Parse a value, returning `None` when the key is unset
    pub fn get_parsed<T>(&self, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        self.get(key)
            .map(|raw| {
                raw.trim()
                    .parse::<T>()
                    .map_err(|e| ScaffoldError::invalid_config(key, format!("{raw:?}: {e}")))
            })
            .transpose()
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }
}

/// Typed settings shared by the starters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub debug: bool,
    pub log_level: String,
    pub data_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "scaffold".to_string(),
            debug: false,
            log_level: "info".to_string(),
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ConfigService::new())
    }

    pub fn from_config(config: &ConfigService) -> Result<Self> {
        let defaults = Self::default();
        let key = |name: &str| format!("{ENV_PREFIX}{name}");

        let debug = config
            .get_parsed::<bool>(&key("DEBUG"))?
            .unwrap_or(defaults.debug);
        let log_level = match config.get(&key("LOG_LEVEL")) {
            Some(level) => level,
            None if debug => "debug".to_string(),
            None => defaults.log_level,
        };

        Ok(Self {
            app_name: config.get_or(&key("APP_NAME"), &defaults.app_name),
            debug,
            log_level,
            data_dir: config
                .get(&key("DATA_DIR"))
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
        })
    }

    /// Resolve a file name inside the data directory
    pub fn data_path(&self, file_name: impl AsRef<std::path::Path>) -> PathBuf {
        self.data_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let config = ConfigService::from_pairs([("A", "1")]);
        assert_eq!(config.get("A").as_deref(), Some("1"));
        assert_eq!(config.get("B"), None);

        config.set("B", "2");
        assert_eq!(config.get_or("B", "x"), "2");
        assert_eq!(config.get_or("C", "x"), "x");
    }

    #[test]
    fn test_clones_share_store() {
        let config = ConfigService::default();
        let other = config.clone();
        other.set("KEY", "value");
        assert_eq!(config.get("KEY").as_deref(), Some("value"));
    }

    #[test]
    fn test_get_parsed() {
        let config = ConfigService::from_pairs([("PORT", "8080"), ("BAD", "eighty")]);
        assert_eq!(config.get_parsed::<u16>("PORT").unwrap(), Some(8080));
        assert_eq!(config.get_parsed::<u16>("MISSING").unwrap(), None);

        let err = config.get_parsed::<u16>("BAD").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidConfig { key, .. } if key == "BAD"));
    }

    #[test]
    fn test_settings_defaults() {
        let settings = Settings::from_config(&ConfigService::default()).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.data_path("items.csv"), PathBuf::from("data/items.csv"));
    }

    #[test]
    fn test_settings_from_config() {
        let config = ConfigService::from_pairs([
            ("SCAFFOLD_APP_NAME", "inventory"),
            ("SCAFFOLD_DEBUG", "true"),
            ("SCAFFOLD_DATA_DIR", "/tmp/inventory"),
        ]);
        let settings = Settings::from_config(&config).unwrap();
        assert_eq!(settings.app_name, "inventory");
        assert!(settings.debug);
        assert_eq!(settings.log_level, "debug");
        assert_eq!(settings.data_dir, PathBuf::from("/tmp/inventory"));
    }

    #[test]
    fn test_explicit_log_level_wins_over_debug() {
        let config = ConfigService::from_pairs([
            ("SCAFFOLD_DEBUG", "true"),
            ("SCAFFOLD_LOG_LEVEL", "warn"),
        ]);
        assert_eq!(Settings::from_config(&config).unwrap().log_level, "warn");
    }

    #[test]
    fn test_invalid_debug_flag() {
        let config = ConfigService::from_pairs([("SCAFFOLD_DEBUG", "maybe")]);
        assert!(Settings::from_config(&config).is_err());
    }
}
