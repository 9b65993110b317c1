//! Canonical item presets

use crate::models::config::ItemConfig;
use crate::models::rules::QualityRule;

pub const AGED_BRIE: &str = "Aged Brie";
pub const SULFURAS: &str = "Sulfuras the Legendary Sword";
pub const BACKSTAGE_PASS: &str = "Backstage Pass";
pub const CONJURED_SHIELD: &str = "Conjured Shield";
pub const REGULAR_SHIELD: &str = "Regular Shield";

/// Gains one quality per day.
pub fn aged_brie() -> ItemConfig {
    ItemConfig::new(AGED_BRIE).with_rule(QualityRule::Appreciating { by: 1 })
}

/// Never has to be sold, so sell-in stops at 1 instead of reaching 0.
pub fn sulfuras() -> ItemConfig {
    ItemConfig::new(SULFURAS)
        .mark_legendary()
        .with_min_sell_in(1)
        .with_rule(QualityRule::Legendary)
}

pub fn backstage_pass() -> ItemConfig {
    ItemConfig::new(BACKSTAGE_PASS).with_rule(QualityRule::backstage_pass())
}

/// Degrades twice as fast as a regular item.
pub fn conjured_shield() -> ItemConfig {
    ItemConfig::new(CONJURED_SHIELD).with_degradation_factor(2)
}

pub fn regular_shield() -> ItemConfig {
    ItemConfig::new(REGULAR_SHIELD)
}

/// All presets, in display order.
pub fn default_configs() -> Vec<ItemConfig> {
    vec![
        aged_brie(),
        sulfuras(),
        backstage_pass(),
        conjured_shield(),
        regular_shield(),
    ]
}
