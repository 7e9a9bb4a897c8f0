//! Health-worker registry.

use rusqlite::{params, Connection, OptionalExtension, Row};

use healthtrack_core::errors::HealthTrackResult;
use healthtrack_core::models::{HealthWorker, NewHealthWorker};

use super::codec::{self, decode_timestamp, encode_timestamp};
use crate::to_storage_err;

const WORKER_COLUMNS: &str = "id, full_name, awc_center, username, user_id, created_at, updated_at";

struct WorkerRow {
    id: String,
    full_name: String,
    awc_center: String,
    username: String,
    user_id: Option<String>,
    created_at: String,
    updated_at: String,
}

impl WorkerRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            full_name: row.get(1)?,
            awc_center: row.get(2)?,
            username: row.get(3)?,
            user_id: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
        })
    }

    fn into_worker(self) -> HealthTrackResult<HealthWorker> {
        Ok(HealthWorker {
            created_at: decode_timestamp("created_at", &self.created_at)?,
            updated_at: decode_timestamp("updated_at", &self.updated_at)?,
            id: self.id,
            full_name: self.full_name,
            awc_center: self.awc_center,
            username: self.username,
            user_id: self.user_id,
        })
    }
}

pub fn insert_worker(conn: &Connection, new: &NewHealthWorker) -> HealthTrackResult<HealthWorker> {
    let now = codec::now();
    let worker = HealthWorker {
        id: uuid::Uuid::new_v4().to_string(),
        full_name: new.full_name.clone(),
        awc_center: new.awc_center.clone(),
        username: new.username.clone(),
        user_id: new.user_id.clone(),
        created_at: now,
        updated_at: now,
    };

    conn.execute(
        "INSERT INTO healthworkers (id, full_name, awc_center, username, user_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            worker.id,
            worker.full_name,
            worker.awc_center,
            worker.username,
            worker.user_id,
            encode_timestamp(worker.created_at),
            encode_timestamp(worker.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(format!("insert_worker: {e}")))?;

    Ok(worker)
}

fn get_by(conn: &Connection, column: &str, value: &str) -> HealthTrackResult<Option<HealthWorker>> {
    let sql = format!("SELECT {WORKER_COLUMNS} FROM healthworkers WHERE {column} = ?1");
    let row = conn
        .query_row(&sql, params![value], WorkerRow::read)
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(WorkerRow::into_worker).transpose()
}

pub fn get_worker(conn: &Connection, id: &str) -> HealthTrackResult<Option<HealthWorker>> {
    get_by(conn, "id", id)
}

pub fn find_by_user(conn: &Connection, user_id: &str) -> HealthTrackResult<Option<HealthWorker>> {
    get_by(conn, "user_id", user_id)
}

/// All workers, oldest registration first.
pub fn list_workers(conn: &Connection) -> HealthTrackResult<Vec<HealthWorker>> {
    let sql = format!("SELECT {WORKER_COLUMNS} FROM healthworkers ORDER BY created_at ASC, rowid ASC");
    let mut stmt = conn
        .prepare(&sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map([], WorkerRow::read)
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.map(|row| {
        row.map_err(|e| to_storage_err(e.to_string()))?
            .into_worker()
    })
    .collect()
}

pub fn count_workers(conn: &Connection) -> HealthTrackResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM healthworkers", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

pub fn delete_worker(conn: &Connection, id: &str) -> HealthTrackResult<bool> {
    let deleted = conn
        .execute("DELETE FROM healthworkers WHERE id = ?1", params![id])
        .map_err(|e| to_storage_err(format!("delete_worker: {e}")))?;
    Ok(deleted > 0)
}
