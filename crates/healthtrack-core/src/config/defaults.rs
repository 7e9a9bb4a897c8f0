// Single source of truth for all default values.

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "healthtrack.db";
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

// --- Prediction ---
pub const DEFAULT_PROBABILITY_DECIMALS: u32 = 4;

// --- Auth ---
pub const DEFAULT_USERNAME_PREFIX: &str = "health";
pub const DEFAULT_GENERATED_PASSWORD_LENGTH: usize = 8;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
pub const DEFAULT_SESSION_TTL_SECS: u64 = 3_600; // 1 hour
pub const DEFAULT_PROFILE_FULL_NAME: &str = "User";
pub const DEFAULT_ACCOUNT_EMAIL_DOMAIN: &str = "healthtrack.local";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
