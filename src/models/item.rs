use rand::Rng;
use tracing::{debug, warn};

use super::config::ItemConfig;
use super::constants::{EXPIRED_DEGRADATION_MULTIPLIER, MAX_SELL_IN, REGULAR_DEGRADATION_FACTOR};
use super::errors::{InventoryError, InventoryResult};
use super::rules::{DegradeDirective, QualityRule, QualityRules};

/// A single inventory item and its daily update rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
    degradation_factor: i32,
    min_sell_in: i32,
    min_quality: i32,
    max_quality: i32,
    legendary: bool,
    rule: QualityRule,
}

impl Item {
    /// Build an item from its configuration and seed random starting values.
    ///
    /// Fails with [`InventoryError::MissingName`] for a blank name and
    /// [`InventoryError::InvalidConfig`] for unusable bounds.
    pub fn new<R: Rng + ?Sized>(config: ItemConfig, rng: &mut R) -> InventoryResult<Self> {
        config.validate()?;

        let mut item = Item {
            sell_in: config.min_sell_in(),
            quality: config.min_quality(),
            degradation_factor: config.degradation_factor(),
            min_sell_in: config.min_sell_in(),
            min_quality: config.min_quality(),
            max_quality: config.max_quality(),
            legendary: config.legendary,
            name: config.name,
            rule: config.rule,
        };
        item.reset_values(rng);
        Ok(item)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    pub fn degradation_factor(&self) -> i32 {
        self.degradation_factor
    }

    pub fn min_sell_in(&self) -> i32 {
        self.min_sell_in
    }

    pub fn min_quality(&self) -> i32 {
        self.min_quality
    }

    pub fn max_quality(&self) -> i32 {
        self.max_quality
    }

    pub fn is_legendary(&self) -> bool {
        self.legendary
    }

    pub fn rule(&self) -> &QualityRule {
        &self.rule
    }

    /// Overwrite sell-in directly, without checking it against `min_sell_in`.
    /// Meant for setting up scenarios; the next update clamps it again.
    pub fn set_sell_in(&mut self, sell_in: i32) {
        self.sell_in = sell_in;
    }

    /// Overwrite quality directly, without checking it against the item's
    /// quality bounds. Values above `max_quality` are held by later updates
    /// rather than pulled down.
    pub fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }

    /// Advance one day.
    pub fn update_day(&mut self) -> InventoryResult<i32> {
        self.update(1)
    }

    /// Advance `num_days`, then recompute quality for the new sell-in.
    ///
    /// Returns the resulting quality. A [`InventoryError::ConflictingRules`]
    /// error leaves quality untouched but keeps the sell-in advance.
    pub fn update(&mut self, num_days: u32) -> InventoryResult<i32> {
        self.update_sell_in(num_days);
        let result = self.update_quality();
        debug!(
            item = %self.name,
            sell_in = self.sell_in,
            quality = self.quality,
            "item updated"
        );
        result
    }

    /// Move sell-in towards its floor. It never drops below `min_sell_in`.
    pub fn update_sell_in(&mut self, num_days: u32) -> i32 {
        let days = i32::try_from(num_days).unwrap_or(i32::MAX);

        if days > self.sell_in {
            self.sell_in = self.min_sell_in;
        } else if self.sell_in > self.min_sell_in {
            self.sell_in = (self.sell_in - days).max(self.min_sell_in);
        }

        self.sell_in
    }

    /// Recompute quality for the current sell-in.
    ///
    /// Must run after [`Item::update_sell_in`]; quality degrades twice as
    /// fast once sell-in has reached zero. Items with no quality left are
    /// not touched.
    pub fn update_quality(&mut self) -> InventoryResult<i32> {
        if self.quality <= 0 {
            return Ok(self.quality);
        }

        let default_degradation = REGULAR_DEGRADATION_FACTOR.saturating_mul(self.degradation_factor);
        let mut degrade_amount = if self.sell_in == 0 {
            default_degradation.saturating_mul(EXPIRED_DEGRADATION_MULTIPLIER)
        } else {
            default_degradation
        };

        let enhancement = self.rule.enhance_by(self.sell_in);

        let overridden = match self.rule.degrade_by(self.sell_in) {
            Some(DegradeDirective::SetQualityTo(value)) => {
                self.quality = value;
                return Ok(self.quality);
            }
            Some(DegradeDirective::Relative(factor)) => {
                degrade_amount = factor.saturating_mul(default_degradation);
                true
            }
            Some(DegradeDirective::Absolute(amount)) => {
                degrade_amount = amount;
                true
            }
            None => false,
        };

        match enhancement {
            Some(_) if overridden => {
                warn!(
                    item = %self.name,
                    sell_in = self.sell_in,
                    "enhance and degrade rules both apply; quality left unchanged"
                );
                Err(InventoryError::ConflictingRules {
                    name: self.name.clone(),
                    sell_in: self.sell_in,
                })
            }
            Some(amount) => {
                self.quality = self.bounded(self.quality.saturating_add(amount));
                Ok(self.quality)
            }
            None => {
                self.quality = self.bounded(self.quality.saturating_sub(degrade_amount));
                Ok(self.quality)
            }
        }
    }

    /// Reseed sell-in and quality uniformly within the item's bounds.
    pub fn reset_values<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.sell_in = rng.gen_range(self.min_sell_in..=MAX_SELL_IN);
        self.quality = rng.gen_range(self.min_quality..=self.max_quality);
    }

    /// Clamp a new quality into `[min_quality, max_quality]`. A value already
    /// above the ceiling is held where it is rather than pulled down.
    fn bounded(&self, value: i32) -> i32 {
        let ceiling = self.max_quality.max(self.quality);
        value.min(ceiling).max(self.min_quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::MAX_QUALITY;
    use crate::models::rules::{DegradeTier, EnhanceTier};
    use crate::services::presets;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Helper: build an item from `config` and force its starting values.
    fn item_with(config: ItemConfig, sell_in: i32, quality: i32) -> Item {
        let mut rng = StdRng::seed_from_u64(7);
        let mut item = Item::new(config, &mut rng).expect("valid config");
        item.set_sell_in(sell_in);
        item.set_quality(quality);
        item
    }

    #[test]
    fn blank_name_is_rejected_without_panicking() {
        let mut rng = StdRng::seed_from_u64(1);
        let result = Item::new(ItemConfig::new("  "), &mut rng);
        assert!(matches!(result, Err(InventoryError::MissingName)));
    }

    #[test]
    fn construction_copies_configuration() {
        let mut rng = StdRng::seed_from_u64(1);
        let item = Item::new(presets::sulfuras(), &mut rng).expect("valid config");
        assert_eq!(item.name(), presets::SULFURAS);
        assert_eq!(item.min_sell_in(), 1);
        assert!(item.is_legendary());
        assert_eq!(*item.rule(), QualityRule::Legendary);
        assert!(item.sell_in() >= 1 && item.sell_in() <= MAX_SELL_IN);
    }

    #[test]
    fn regular_item_loses_one_per_day() {
        let mut item = item_with(presets::regular_shield(), 5, 20);
        assert_eq!(item.update_day().expect("update"), 19);
        assert_eq!(item.sell_in(), 4);
    }

    #[test]
    fn degradation_doubles_once_sell_in_reaches_zero() {
        let mut item = item_with(presets::regular_shield(), 1, 20);
        assert_eq!(item.update_day().expect("update"), 18);
        assert_eq!(item.sell_in(), 0);
        assert_eq!(item.update_day().expect("update"), 16);
        assert_eq!(item.sell_in(), 0);
    }

    #[test]
    fn sell_in_clamps_to_floor_when_days_exceed_it() {
        let mut item = item_with(presets::regular_shield(), 3, 20);
        assert_eq!(item.update_sell_in(5), 0);
    }

    #[test]
    fn sell_in_never_crosses_nonzero_floor() {
        let config = ItemConfig::new("Slow Clock").with_min_sell_in(3);
        let mut item = item_with(config, 4, 20);
        assert_eq!(item.update_sell_in(4), 3);
        assert_eq!(item.update_sell_in(1), 3);
    }

    #[test]
    fn aged_brie_caps_at_max_quality() {
        let mut item = item_with(presets::aged_brie(), 10, 48);
        for _ in 0..3 {
            item.update_day().expect("update");
        }
        assert_eq!(item.quality(), MAX_QUALITY);
        assert_eq!(item.sell_in(), 7);
    }

    #[test]
    fn legendary_item_never_changes() {
        let mut item = item_with(presets::sulfuras(), 1, 80);
        for _ in 0..10 {
            item.update_day().expect("update");
        }
        assert_eq!(item.sell_in(), 1);
        assert_eq!(item.quality(), 80);
    }

    #[test]
    fn backstage_pass_gains_then_drops_to_zero() {
        let mut item = item_with(presets::backstage_pass(), 5, 20);
        item.update_day().expect("update");
        assert_eq!((item.sell_in(), item.quality()), (4, 23));

        for _ in 0..3 {
            item.update_day().expect("update");
        }
        assert_eq!((item.sell_in(), item.quality()), (1, 32));

        item.update_day().expect("update");
        assert_eq!((item.sell_in(), item.quality()), (0, 0));
    }

    #[test]
    fn backstage_pass_gains_two_within_ten_days() {
        let mut item = item_with(presets::backstage_pass(), 11, 20);
        assert_eq!(item.update_day().expect("update"), 22);
        assert_eq!(item.sell_in(), 10);
    }

    #[test]
    fn backstage_pass_degrades_normally_far_from_event() {
        let mut item = item_with(presets::backstage_pass(), 14, 20);
        assert_eq!(item.update_day().expect("update"), 19);
    }

    #[test]
    fn conjured_degrades_twice_as_fast_as_regular() {
        let mut regular = item_with(presets::regular_shield(), 5, 20);
        let mut conjured = item_with(presets::conjured_shield(), 5, 20);

        regular.update_day().expect("update");
        conjured.update_day().expect("update");
        assert_eq!(regular.quality(), 19);
        assert_eq!(conjured.quality(), 18);

        for _ in 0..4 {
            regular.update_day().expect("update");
            conjured.update_day().expect("update");
        }
        assert_eq!(regular.sell_in(), 0);
        assert_eq!(regular.quality(), 14);
        assert_eq!(conjured.quality(), 8);

        let regular_before = regular.quality();
        regular.update_day().expect("update");
        assert_eq!(regular_before - regular.quality(), 2);

        conjured.set_quality(20);
        conjured.update_day().expect("update");
        assert_eq!(conjured.quality(), 16);
    }

    #[test]
    fn quality_at_zero_stays_at_zero() {
        let mut item = item_with(presets::conjured_shield(), 0, 3);
        for _ in 0..20 {
            item.update_day().expect("update");
            assert_eq!(item.quality(), 0);
        }
    }

    #[test]
    fn degradation_stops_at_min_quality() {
        let config = ItemConfig::new("Hardy Shield").with_min_quality(10);
        let mut item = item_with(config, 0, 11);
        assert_eq!(item.update_day().expect("update"), 10);
        assert_eq!(item.update_day().expect("update"), 10);
    }

    #[test]
    fn relative_directive_scales_default_degradation() {
        let config = ItemConfig::new("Fragile")
            .with_degradation_factor(2)
            .with_rule(QualityRule::Directed {
                directive: DegradeDirective::Relative(3),
            });
        let mut item = item_with(config, 5, 30);
        assert_eq!(item.update_day().expect("update"), 24);
    }

    #[test]
    fn absolute_directive_replaces_default_degradation() {
        let config = ItemConfig::new("Fragile")
            .with_degradation_factor(2)
            .with_rule(QualityRule::Directed {
                directive: DegradeDirective::Absolute(5),
            });
        let mut item = item_with(config, 0, 30);
        assert_eq!(item.update_day().expect("update"), 25);
    }

    #[test]
    fn set_quality_directive_pins_value() {
        let config = ItemConfig::new("Pinned").with_rule(QualityRule::Directed {
            directive: DegradeDirective::SetQualityTo(7),
        });
        let mut item = item_with(config, 5, 30);
        assert_eq!(item.update_day().expect("update"), 7);
    }

    #[test]
    fn enhance_and_degrade_together_is_reported() {
        let config = ItemConfig::new("Confused").with_rule(QualityRule::Scheduled {
            enhance: vec![EnhanceTier { max_sell_in: 10, amount: 1 }],
            degrade: vec![DegradeTier {
                max_sell_in: 5,
                directive: DegradeDirective::Absolute(2),
            }],
        });
        let mut item = item_with(config, 8, 30);

        // Only the enhance tier matches at sell-in 7.
        assert_eq!(item.update_day().expect("update"), 31);

        item.set_sell_in(5);
        let err = item.update_day().expect_err("both tiers match at sell-in 4");
        assert!(matches!(
            err,
            InventoryError::ConflictingRules { ref name, sell_in: 4 } if name == "Confused"
        ));
        assert_eq!(item.sell_in(), 4);
        assert_eq!(item.quality(), 31);
    }

    #[test]
    fn huge_degradation_factor_saturates_instead_of_overflowing() {
        let config = ItemConfig::new("Crumbling Tower").with_degradation_factor(2_000_000_000);
        let mut item = item_with(config, 1, 30);
        assert_eq!(item.update_day().expect("update"), 0);
        assert_eq!(item.sell_in(), 0);
    }

    #[test]
    fn huge_enhancement_stops_at_cap() {
        let config = ItemConfig::new("Runaway Brie")
            .with_rule(QualityRule::Appreciating { by: i32::MAX });
        let mut item = item_with(config, 5, 10);
        assert_eq!(item.update_day().expect("update"), MAX_QUALITY);
    }

    #[test]
    fn extreme_directives_stay_within_bounds() {
        let relative = ItemConfig::new("Shattering")
            .with_degradation_factor(3)
            .with_rule(QualityRule::Directed {
                directive: DegradeDirective::Relative(i32::MAX),
            });
        let mut item = item_with(relative, 4, 30);
        assert_eq!(item.update_day().expect("update"), 0);

        let absolute = ItemConfig::new("Inverted")
            .with_rule(QualityRule::Directed {
                directive: DegradeDirective::Absolute(i32::MIN),
            });
        let mut item = item_with(absolute, 4, 30);
        assert_eq!(item.update_day().expect("update"), MAX_QUALITY);
    }

    #[test]
    fn raw_sell_in_override_is_clamped_by_next_update() {
        let mut sulfuras = item_with(presets::sulfuras(), 0, 30);
        assert_eq!(sulfuras.sell_in(), 0);
        sulfuras.update_day().expect("update");
        assert_eq!(sulfuras.sell_in(), 1);
        assert_eq!(sulfuras.quality(), 30);
    }

    #[test]
    fn reset_values_stay_in_bounds() {
        let config = ItemConfig::new("Bounded")
            .with_min_sell_in(3)
            .with_min_quality(5)
            .with_max_quality(9);
        let mut rng = StdRng::seed_from_u64(99);
        let mut item = Item::new(config, &mut rng).expect("valid config");
        for _ in 0..500 {
            item.reset_values(&mut rng);
            assert!((3..=MAX_SELL_IN).contains(&item.sell_in()));
            assert!((5..=9).contains(&item.quality()));
        }
    }
}
