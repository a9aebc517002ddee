//! Configuration types.

use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Runtime configuration for the demo binary and the mock catalog source.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Category slug used to title generated books, e.g. "science-fiction".
    pub catalog_category: String,
    /// Number of mock catalog items to generate.
    pub catalog_size: usize,
    /// Seed for the mock catalog generator.
    pub catalog_seed: u64,
    /// Items per listing page.
    pub page_size: usize,
    /// Simulated loading delay before revealing dashboard data.
    pub reveal_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_category: "science-fiction".to_string(),
            catalog_size: 20,
            catalog_seed: 42,
            page_size: 8,
            reveal_delay: Duration::from_millis(1500),
        }
    }
}

impl AppConfig {
    /// Build configuration from `BOOKLY_*` environment variables.
    ///
    /// Missing variables fall back to defaults; present but unparsable ones
    /// are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_category = lookup("BOOKLY_CATALOG_CATEGORY")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.catalog_category);

        let catalog_size =
            parse_var(&lookup, "BOOKLY_CATALOG_SIZE")?.unwrap_or(defaults.catalog_size);
        let catalog_seed =
            parse_var(&lookup, "BOOKLY_CATALOG_SEED")?.unwrap_or(defaults.catalog_seed);

        let page_size: usize = parse_var(&lookup, "BOOKLY_PAGE_SIZE")?.unwrap_or(defaults.page_size);
        if page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "BOOKLY_PAGE_SIZE".to_string(),
                message: "must be at least 1".to_string(),
            }
            .into());
        }

        let reveal_delay = parse_var::<u64, _>(&lookup, "BOOKLY_REVEAL_DELAY_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.reveal_delay);

        Ok(Self {
            catalog_category,
            catalog_size,
            catalog_seed,
            page_size,
            reveal_delay,
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> std::result::Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("{raw:?}: {e}"),
            }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::error::Error;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn overrides_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("BOOKLY_CATALOG_CATEGORY", "fantasy"),
            ("BOOKLY_CATALOG_SIZE", "5"),
            ("BOOKLY_CATALOG_SEED", " 7 "),
            ("BOOKLY_PAGE_SIZE", "3"),
            ("BOOKLY_REVEAL_DELAY_MS", "10"),
        ]))
        .unwrap();

        assert_eq!(config.catalog_category, "fantasy");
        assert_eq!(config.catalog_size, 5);
        assert_eq!(config.catalog_seed, 7);
        assert_eq!(config.page_size, 3);
        assert_eq!(config.reveal_delay, Duration::from_millis(10));
    }

    #[test]
    fn blank_category_falls_back_to_default() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("BOOKLY_CATALOG_CATEGORY", "  ")])).unwrap();
        assert_eq!(config.catalog_category, "science-fiction");
    }

    #[test]
    fn unparsable_value_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("BOOKLY_CATALOG_SIZE", "lots")]))
            .unwrap_err();
        match err {
            Error::Config(ConfigError::InvalidValue { key, .. }) => {
                assert_eq!(key, "BOOKLY_CATALOG_SIZE")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[("BOOKLY_PAGE_SIZE", "0")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("BOOKLY_PAGE_SIZE"));
    }
}
