use std::path::PathBuf;

use thiserror::Error;

/// Inventory-specific error types
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Item configuration had no name, or only whitespace
    #[error("cannot create item: a name is required")]
    MissingName,

    /// Item configuration was structurally valid but unusable
    #[error("invalid configuration for '{name}': {reason}")]
    InvalidConfig { name: String, reason: String },

    /// Enhancement and degradation rules both fired on the same day
    #[error(
        "conflicting quality rules for '{name}' at sell-in {sell_in}: \
         only one of enhance/degrade may apply"
    )]
    ConflictingRules { name: String, sell_in: i32 },

    /// Inventory configuration file could not be read
    #[error("failed to read inventory config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Inventory configuration file was not valid TOML for the schema
    #[error("failed to parse inventory config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl InventoryError {
    pub fn invalid_config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by how an item was configured, as opposed to I/O.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            InventoryError::MissingName
                | InventoryError::InvalidConfig { .. }
                | InventoryError::ConflictingRules { .. }
        )
    }
}

/// Type alias for Results using InventoryError
pub type InventoryResult<T> = Result<T, InventoryError>;
