//! Feed configuration.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! describes the baseline feed: 1825 dates from 2000-01-01, one opening record
//! on `gr00.pr00` and twenty movements drawn from catalog indices 10..=199.
//!
//! ```yaml
//! start_date: 2000-01-01
//! days: 1825
//! movements_per_day: 20
//! seed: 42
//! ```

use crate::catalog::{Catalog, DEFAULT_GROUPS, DEFAULT_PRODUCTS_PER_GROUP};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading or checking a [`FeedConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Catalog has no products to draw from
    #[error("Catalog is empty ({groups} groups x {products_per_group} products)")]
    EmptyCatalog { groups: u8, products_per_group: u8 },

    /// A configured catalog index does not exist
    #[error("{field} = {index} is outside the catalog (size {len})")]
    IndexOutOfCatalog {
        field: &'static str,
        index: usize,
        len: usize,
    },

    /// Movement index range is inverted
    #[error("Invalid movement index range: {min}..={max}")]
    InvalidRange { min: usize, max: usize },
}

/// Description of the feed to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// First date of the feed
    pub start_date: NaiveDate,
    /// Number of consecutive dates
    pub days: u32,
    /// Movement records following each opening record
    pub movements_per_day: u32,
    /// Number of product groups in the catalog
    pub groups: u8,
    /// Number of products per group in the catalog
    pub products_per_group: u8,
    /// Catalog index used by every opening record
    pub opening_index: usize,
    /// Amount written on opening records
    pub opening_amount: f64,
    /// Lowest catalog index a movement may draw (inclusive)
    pub movement_index_min: usize,
    /// Highest catalog index a movement may draw (inclusive)
    pub movement_index_max: usize,
    /// Amount written on movement records
    pub movement_amount: f64,
    /// Random seed for reproducible output
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
            days: 365 * 5,
            movements_per_day: 20,
            groups: DEFAULT_GROUPS,
            products_per_group: DEFAULT_PRODUCTS_PER_GROUP,
            opening_index: 0,
            opening_amount: 20.0,
            movement_index_min: 10,
            movement_index_max: 199,
            movement_amount: 1.0,
            seed: None,
        }
    }
}

impl FeedConfig {
    /// Load config from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // serde_yaml rejects an empty document; treat it as "all defaults".
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_days(mut self, days: u32) -> Self {
        self.days = days;
        self
    }

    /// Build the catalog this config draws from.
    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.groups, self.products_per_group)
    }

    /// Lines produced for a single date.
    pub fn lines_per_day(&self) -> u64 {
        1 + self.movements_per_day as u64
    }

    /// Total lines produced by the whole feed.
    pub fn total_lines(&self) -> u64 {
        self.days as u64 * self.lines_per_day()
    }

    /// Check that every configured index lies inside the catalog.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let len = self.groups as usize * self.products_per_group as usize;
        if len == 0 {
            return Err(ConfigError::EmptyCatalog {
                groups: self.groups,
                products_per_group: self.products_per_group,
            });
        }

        let indices = [
            ("opening_index", self.opening_index),
            ("movement_index_min", self.movement_index_min),
            ("movement_index_max", self.movement_index_max),
        ];
        for (field, index) in indices {
            if index >= len {
                return Err(ConfigError::IndexOutOfCatalog { field, index, len });
            }
        }

        if self.movement_index_min > self.movement_index_max {
            return Err(ConfigError::InvalidRange {
                min: self.movement_index_min,
                max: self.movement_index_max,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_matches_baseline_feed() {
        let config = FeedConfig::default();

        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
        assert_eq!(config.days, 1825);
        assert_eq!(config.lines_per_day(), 21);
        assert_eq!(config.total_lines(), 38_325);
        assert_eq!(config.catalog().len(), 200);
        assert!(config.seed.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = FeedConfig::from_yaml(
            r#"
start_date: 2010-03-01
days: 7
seed: 42
"#,
        )
        .unwrap();

        assert_eq!(config.start_date, NaiveDate::from_ymd_opt(2010, 3, 1).unwrap());
        assert_eq!(config.days, 7);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.movements_per_day, 20);
        assert_eq!(config.movement_index_max, 199);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(FeedConfig::from_yaml("").unwrap(), FeedConfig::default());
        assert_eq!(FeedConfig::from_yaml("  \n").unwrap(), FeedConfig::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let result = FeedConfig::from_yaml("days: [not, a, number]");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "movements_per_day: 5").unwrap();
        writeln!(file, "movement_index_min: 0").unwrap();

        let config = FeedConfig::from_file(file.path()).unwrap();
        assert_eq!(config.movements_per_day, 5);
        assert_eq!(config.movement_index_min, 0);
        assert_eq!(config.lines_per_day(), 6);
    }

    #[test]
    fn test_missing_file() {
        let result = FeedConfig::from_file("/nonexistent/opfeed.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_validate_index_outside_catalog() {
        let config = FeedConfig {
            movement_index_max: 200,
            ..FeedConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::IndexOutOfCatalog {
                field: "movement_index_max",
                index: 200,
                len: 200
            })
        ));
    }

    #[test]
    fn test_validate_inverted_range() {
        let config = FeedConfig {
            movement_index_min: 50,
            movement_index_max: 10,
            ..FeedConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange { min: 50, max: 10 })
        ));
    }

    #[test]
    fn test_validate_empty_catalog() {
        let config = FeedConfig {
            groups: 0,
            ..FeedConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyCatalog { .. })
        ));
    }

    #[test]
    fn test_builders() {
        let start = NaiveDate::from_ymd_opt(2020, 2, 28).unwrap();
        let config = FeedConfig::default()
            .with_seed(7)
            .with_start_date(start)
            .with_days(3);

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.start_date, start);
        assert_eq!(config.total_lines(), 63);
    }
}
