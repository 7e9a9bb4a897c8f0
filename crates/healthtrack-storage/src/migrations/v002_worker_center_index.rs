//! v002: Index health workers by center for per-center dashboards.

pub const MIGRATION_SQL: &str = "
CREATE INDEX IF NOT EXISTS idx_healthworkers_center ON healthworkers(awc_center);
";
