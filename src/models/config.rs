//! Item configuration records
//!
//! An inventory is described by an ordered list of [`ItemConfig`] records,
//! either built in code (see `services::presets`) or loaded from TOML:
//!
//! ```toml
//! [[items]]
//! name = "Aged Brie"
//! rule = { kind = "appreciating", by = 1 }
//!
//! [[items]]
//! name = "Conjured Shield"
//! degradation_factor = 2
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_DEGRADATION_FACTOR, DEFAULT_MIN_QUALITY, DEFAULT_MIN_SELL_IN, MAX_QUALITY,
    MAX_SELL_IN,
};
use super::errors::{InventoryError, InventoryResult};
use super::rules::QualityRule;

/// Configuration for a single inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Required; blank names are rejected when the item is built.
    #[serde(default)]
    pub name: String,
    /// How many times faster than a regular item quality degrades.
    #[serde(default, alias = "degradation_factor_relative_to_normal")]
    pub degradation_factor: Option<i32>,
    #[serde(default)]
    pub min_sell_in: Option<i32>,
    #[serde(default)]
    pub min_quality: Option<i32>,
    #[serde(default)]
    pub max_quality: Option<i32>,
    #[serde(default)]
    pub legendary: bool,
    #[serde(default)]
    pub rule: QualityRule,
}

impl ItemConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_rule(mut self, rule: QualityRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn with_degradation_factor(mut self, factor: i32) -> Self {
        self.degradation_factor = Some(factor);
        self
    }

    pub fn with_min_sell_in(mut self, min_sell_in: i32) -> Self {
        self.min_sell_in = Some(min_sell_in);
        self
    }

    pub fn with_min_quality(mut self, min_quality: i32) -> Self {
        self.min_quality = Some(min_quality);
        self
    }

    pub fn with_max_quality(mut self, max_quality: i32) -> Self {
        self.max_quality = Some(max_quality);
        self
    }

    pub fn mark_legendary(mut self) -> Self {
        self.legendary = true;
        self
    }

    pub fn degradation_factor(&self) -> i32 {
        self.degradation_factor.unwrap_or(DEFAULT_DEGRADATION_FACTOR)
    }

    pub fn min_sell_in(&self) -> i32 {
        self.min_sell_in.unwrap_or(DEFAULT_MIN_SELL_IN)
    }

    pub fn min_quality(&self) -> i32 {
        self.min_quality.unwrap_or(DEFAULT_MIN_QUALITY)
    }

    pub fn max_quality(&self) -> i32 {
        self.max_quality.unwrap_or(MAX_QUALITY)
    }

    /// Check that an item can be built from this record.
    ///
    /// Besides the required name, the bounds must leave a non-empty range
    /// for `reset_values` to draw from.
    pub fn validate(&self) -> InventoryResult<()> {
        if self.name.trim().is_empty() {
            return Err(InventoryError::MissingName);
        }
        if self.degradation_factor() < 1 {
            return Err(InventoryError::invalid_config(
                &self.name,
                format!(
                    "degradation factor must be at least 1, got {}",
                    self.degradation_factor()
                ),
            ));
        }
        if self.min_sell_in() < 0 || self.min_sell_in() > MAX_SELL_IN {
            return Err(InventoryError::invalid_config(
                &self.name,
                format!(
                    "min sell-in must be within 0..={}, got {}",
                    MAX_SELL_IN,
                    self.min_sell_in()
                ),
            ));
        }
        if self.min_quality() < 0 || self.min_quality() > self.max_quality() {
            return Err(InventoryError::invalid_config(
                &self.name,
                format!(
                    "quality bounds {}..={} are empty or negative",
                    self.min_quality(),
                    self.max_quality()
                ),
            ));
        }
        Ok(())
    }
}

/// An ordered list of item configurations. Order is display order only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

impl Default for InventoryConfig {
    /// The canonical preset inventory.
    fn default() -> Self {
        Self {
            items: crate::services::presets::default_configs(),
        }
    }
}

impl InventoryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads an inventory description from a TOML file.
    ///
    /// Individual records are not validated here; invalid items are reported
    /// when the inventory is built.
    pub fn load(path: impl AsRef<Path>) -> InventoryResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| InventoryError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content).map_err(|e| InventoryError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
