//! Quality rules
//!
//! Each item carries one [`QualityRule`], chosen when the item is configured.
//! A rule answers two questions for the item's current sell-in value: how much
//! should quality rise today, and should the default degradation be replaced.

use serde::{Deserialize, Serialize};

/// Override for the default daily degradation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegradeDirective {
    /// Pin quality to this value and skip the rest of the day's update.
    SetQualityTo(i32),
    /// Degrade by `factor` times the item's default degradation.
    Relative(i32),
    /// Degrade by exactly this amount.
    Absolute(i32),
}

/// Per-item behaviour hooks consulted once per simulated day.
pub trait QualityRules {
    /// Amount quality increases by at this sell-in, or `None` to degrade instead.
    fn enhance_by(&self, sell_in: i32) -> Option<i32>;

    /// Replacement for the default degradation at this sell-in, if any.
    fn degrade_by(&self, sell_in: i32) -> Option<DegradeDirective>;
}

/// One step of a [`QualityRule::Tiered`] schedule: while sell-in is at or
/// below `max_sell_in`, quality rises by `amount` per day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhanceTier {
    pub max_sell_in: i32,
    pub amount: i32,
}

/// One step of a [`QualityRule::Scheduled`] degrade schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DegradeTier {
    pub max_sell_in: i32,
    pub directive: DegradeDirective,
}

/// The rule variants an item can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QualityRule {
    /// Degrades by the item's default rate, twice as fast once expired.
    #[default]
    Standard,
    /// Gains a fixed amount every day (e.g. Aged Brie).
    Appreciating { by: i32 },
    /// Never changes quality.
    Legendary,
    /// Gains according to the tightest matching tier; outside every tier it
    /// degrades normally. With `expires`, quality drops to zero at sell-in 0.
    Tiered {
        tiers: Vec<EnhanceTier>,
        #[serde(default)]
        expires: bool,
    },
    /// Always replaces the default degradation with `directive`.
    Directed { directive: DegradeDirective },
    /// Free-form schedule with independent enhance and degrade tiers. The
    /// two schedules must not overlap; a day on which both match is a
    /// configuration error reported by the update.
    Scheduled {
        #[serde(default)]
        enhance: Vec<EnhanceTier>,
        #[serde(default)]
        degrade: Vec<DegradeTier>,
    },
}

impl QualityRule {
    /// Backstage pass schedule: +2 within ten days, +3 within five,
    /// worthless once the event has passed.
    pub fn backstage_pass() -> Self {
        QualityRule::Tiered {
            tiers: vec![
                EnhanceTier { max_sell_in: 5, amount: 3 },
                EnhanceTier { max_sell_in: 10, amount: 2 },
            ],
            expires: true,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityRule::Standard => "standard",
            QualityRule::Appreciating { .. } => "appreciating",
            QualityRule::Legendary => "legendary",
            QualityRule::Tiered { .. } => "tiered",
            QualityRule::Directed { .. } => "directed",
            QualityRule::Scheduled { .. } => "scheduled",
        }
    }
}

impl QualityRules for QualityRule {
    fn enhance_by(&self, sell_in: i32) -> Option<i32> {
        match self {
            QualityRule::Standard | QualityRule::Directed { .. } => None,
            QualityRule::Appreciating { by } => Some(*by),
            QualityRule::Legendary => Some(0),
            QualityRule::Tiered { tiers, .. } | QualityRule::Scheduled { enhance: tiers, .. } => {
                tiers
                    .iter()
                    .filter(|tier| sell_in <= tier.max_sell_in)
                    .min_by_key(|tier| tier.max_sell_in)
                    .map(|tier| tier.amount)
            }
        }
    }

    fn degrade_by(&self, sell_in: i32) -> Option<DegradeDirective> {
        match self {
            QualityRule::Tiered { expires: true, .. } if sell_in == 0 => {
                Some(DegradeDirective::SetQualityTo(0))
            }
            QualityRule::Directed { directive } => Some(*directive),
            QualityRule::Scheduled { degrade, .. } => degrade
                .iter()
                .filter(|tier| sell_in <= tier.max_sell_in)
                .min_by_key(|tier| tier.max_sell_in)
                .map(|tier| tier.directive),
            _ => None,
        }
    }
}
