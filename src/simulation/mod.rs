//! Day-by-day simulation
//!
//! Owns the inventory and counts simulated days. Each day is one
//! `update_all` pass over the inventory.

use tracing::{info, warn};

use crate::models::config::InventoryConfig;
use crate::models::errors::InventoryError;
use crate::services::inventory::{Inventory, TickReport};

/// Drives an [`Inventory`] through simulated days
pub struct Simulation {
    inventory: Inventory,
    day: u32,
}

impl Simulation {
    /// Starts at day 0 with an already-built inventory
    pub fn new(inventory: Inventory) -> Self {
        Self { inventory, day: 0 }
    }

    /// Builds the inventory from `config`
    ///
    /// # Returns
    ///
    /// The simulation plus any item configurations that were skipped as
    /// invalid.
    pub fn from_config(config: InventoryConfig, seed: u64) -> (Self, Vec<InventoryError>) {
        let (inventory, skipped) = Inventory::from_configs(config.items, seed);
        (Self::new(inventory), skipped)
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Advances every item by one day
    pub fn advance_day(&mut self) -> TickReport {
        let report = self.inventory.update_all();
        self.day += 1;

        if report.is_clean() {
            info!(day = self.day, items = report.updated, "day simulated");
        } else {
            warn!(
                day = self.day,
                items = report.updated,
                failures = report.failures.len(),
                "day simulated with rule conflicts"
            );
        }
        report
    }

    /// Advances `days` days, returning one report per day
    pub fn run(&mut self, days: u32) -> Vec<TickReport> {
        (0..days).map(|_| self.advance_day()).collect()
    }

    /// Reseeds every item and restarts the day count
    pub fn reset(&mut self) {
        self.inventory.reset_all();
        self.day = 0;
        info!("inventory reset");
    }
}
