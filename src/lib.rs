//! Gilded Rose inventory engine
//!
//! Models a small shop inventory whose items lose (or gain) quality as
//! their sell-by date approaches. Every simulated day each item's sell-in
//! moves towards its floor and its quality is recomputed from the item's
//! configured rule.
//!
//! # Modules
//!
//! - [`models`] - Items, configuration records, quality rules, errors
//! - [`services`] - Inventory collection, presets, console loop
//! - [`simulation`] - Day counter driving the inventory
//! - [`io`] - Input/output abstractions for testing
//! - [`ui`] - Presentation of inventory state
//!
//! # Example
//!
//! ```rust
//! use gildedrose::{InventoryConfig, Simulation};
//!
//! let (mut simulation, skipped) = Simulation::from_config(InventoryConfig::default(), 42);
//! assert!(skipped.is_empty());
//! simulation.advance_day();
//! assert_eq!(simulation.day(), 1);
//! ```

pub mod cli;
pub mod io;
pub mod logging;
pub mod models;
pub mod services;
pub mod simulation;
pub mod ui;

// Re-export commonly used types
pub use models::config::{InventoryConfig, ItemConfig};
pub use models::errors::{InventoryError, InventoryResult};
pub use models::item::Item;
pub use models::rules::{DegradeDirective, QualityRule, QualityRules};
pub use services::inventory::{Inventory, TickReport};
pub use simulation::Simulation;
