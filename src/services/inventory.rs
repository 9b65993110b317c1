use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, warn};

use crate::models::config::ItemConfig;
use crate::models::errors::{InventoryError, InventoryResult};
use crate::models::item::Item;

/// Outcome of one `update_all` pass.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Items whose update completed normally.
    pub updated: usize,
    /// Items whose update reported an error, by name.
    pub failures: Vec<(String, InventoryError)>,
}

impl TickReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Owned, ordered collection of items plus the RNG used to seed them.
pub struct Inventory {
    items: Vec<Item>,
    rng: StdRng,
}

impl Inventory {
    pub fn new(seed: u64) -> Self {
        Inventory {
            items: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Build an inventory from configuration records.
    ///
    /// Invalid records are skipped; their errors are logged and returned so
    /// the caller can surface them.
    pub fn from_configs<I>(configs: I, seed: u64) -> (Self, Vec<InventoryError>)
    where
        I: IntoIterator<Item = ItemConfig>,
    {
        let mut inventory = Inventory::new(seed);
        let mut skipped = Vec::new();

        for config in configs {
            if let Err(err) = inventory.add(config) {
                warn!(error = %err, "skipping item");
                skipped.push(err);
            }
        }

        (inventory, skipped)
    }

    /// Validate `config` and append the resulting item.
    pub fn add(&mut self, config: ItemConfig) -> InventoryResult<&Item> {
        let item = Item::new(config, &mut self.rng)?;
        debug!(item = item.name(), "item added");
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Advance every item by one day. Items are independent, so one item's
    /// failure does not stop the others.
    pub fn update_all(&mut self) -> TickReport {
        let mut report = TickReport::default();
        for item in self.items.iter_mut() {
            match item.update_day() {
                Ok(_) => report.updated += 1,
                Err(err) => report.failures.push((item.name().to_string(), err)),
            }
        }
        report
    }

    /// Reseed every item with fresh random values.
    pub fn reset_all(&mut self) {
        for item in self.items.iter_mut() {
            item.reset_values(&mut self.rng);
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// First item with this name.
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.name() == name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
