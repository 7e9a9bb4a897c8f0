//! Single write connection behind a mutex. Writes are serialized.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use healthtrack_core::errors::HealthTrackResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: &Path, busy_timeout_ms: u32) -> HealthTrackResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> HealthTrackResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, 0)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Acquire the write lock and run `f` with the connection.
    pub fn with_conn<F, T>(&self, f: F) -> HealthTrackResult<T>
    where
        F: FnOnce(&Connection) -> HealthTrackResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
