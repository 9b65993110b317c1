/// Quality lost per day by a regular item before its sell-by date.
pub const REGULAR_DEGRADATION_FACTOR: i32 = 1;

/// Upper bound for quality unless an item configures its own ceiling.
pub const MAX_QUALITY: i32 = 50;

/// Upper bound for a freshly reset sell-in value (two weeks).
pub const MAX_SELL_IN: i32 = 14;

pub const DEFAULT_MIN_SELL_IN: i32 = 0;
pub const DEFAULT_MIN_QUALITY: i32 = 0;
pub const DEFAULT_DEGRADATION_FACTOR: i32 = 1;

/// Degradation multiplier applied once the sell-by date has passed.
pub const EXPIRED_DEGRADATION_MULTIPLIER: i32 = 2;
