/// HealthTrack system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Decimal places kept when probabilities are stored or displayed.
pub const PROBABILITY_DECIMALS: u32 = 4;

/// Most decimal places a probability can be rounded to; beyond this an
/// `f64` carries no further digits.
pub const MAX_PROBABILITY_DECIMALS: u32 = f64::DIGITS;

/// Inclusive bounds of the poverty and sanitation indices.
pub const MIN_SOCIAL_INDEX: u8 = 0;
pub const MAX_SOCIAL_INDEX: u8 = 10;

/// Smallest accepted number of meals per day.
pub const MIN_MEALS_PER_DAY: u32 = 1;

/// Tolerance used when checking that a probability triple sums to one.
pub const PROBABILITY_SUM_TOLERANCE: f64 = 1e-3;
