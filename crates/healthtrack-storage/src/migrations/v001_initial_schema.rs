//! v001: Core tables: healthworkers, children, health_records, profiles.

pub const MIGRATION_SQL: &str = "
CREATE TABLE IF NOT EXISTS healthworkers (
    id          TEXT PRIMARY KEY,
    full_name   TEXT NOT NULL,
    awc_center  TEXT NOT NULL,
    username    TEXT NOT NULL UNIQUE,
    user_id     TEXT UNIQUE,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS children (
    id               TEXT PRIMARY KEY,
    name             TEXT NOT NULL,
    date_of_birth    TEXT NOT NULL,
    gender           TEXT NOT NULL,
    guardian_name    TEXT NOT NULL,
    city             TEXT NOT NULL,
    district         TEXT NOT NULL,
    awc_center       TEXT NOT NULL,
    healthworker_id  TEXT,
    current_status   TEXT NOT NULL DEFAULT 'normal'
                     CHECK (current_status IN ('sam', 'mam', 'normal')),
    created_at       TEXT NOT NULL,
    updated_at       TEXT NOT NULL,
    FOREIGN KEY (healthworker_id) REFERENCES healthworkers(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_children_center ON children(awc_center);
CREATE INDEX IF NOT EXISTS idx_children_status ON children(current_status);
CREATE INDEX IF NOT EXISTS idx_children_created ON children(created_at);

CREATE TABLE IF NOT EXISTS health_records (
    id                  TEXT PRIMARY KEY,
    child_id            TEXT NOT NULL,
    height              REAL NOT NULL,
    weight              REAL NOT NULL,
    edema               INTEGER NOT NULL DEFAULT 0,
    poverty_index       INTEGER NOT NULL,
    sanitation_index    INTEGER NOT NULL,
    meals_per_day       INTEGER NOT NULL,
    predicted_status    TEXT NOT NULL
                        CHECK (predicted_status IN ('sam', 'mam', 'normal')),
    sam_probability     REAL NOT NULL,
    mam_probability     REAL NOT NULL,
    normal_probability  REAL NOT NULL,
    recorded_at         TEXT NOT NULL,
    recorded_by         TEXT,
    FOREIGN KEY (child_id) REFERENCES children(id) ON DELETE CASCADE,
    FOREIGN KEY (recorded_by) REFERENCES healthworkers(id) ON DELETE SET NULL
);

CREATE INDEX IF NOT EXISTS idx_records_child ON health_records(child_id, recorded_at);

CREATE TABLE IF NOT EXISTS profiles (
    id          TEXT PRIMARY KEY,
    user_id     TEXT NOT NULL UNIQUE,
    role        TEXT NOT NULL CHECK (role IN ('admin', 'healthworker')),
    full_name   TEXT NOT NULL,
    username    TEXT,
    awc_center  TEXT,
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);
";
