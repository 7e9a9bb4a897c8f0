//! StorageEngine: owns the ConnectionPool, runs migrations at startup,
//! implements IDataStore.

use std::path::Path;

use healthtrack_core::config::StorageConfig;
use healthtrack_core::errors::HealthTrackResult;
use healthtrack_core::models::{
    CenterStatusCounts, Child, ChildFilter, HealthRecord, HealthWorker, NewChild,
    NewHealthRecord, NewHealthWorker, NewProfile, Profile, ReportFilter,
};
use healthtrack_core::traits::IDataStore;
use healthtrack_observability::storage_span;

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{aggregation, child_ops, health_worker_ops, profile_ops, record_ops};

/// SQLite-backed data store.
pub struct StorageEngine {
    pool: ConnectionPool,
}

impl StorageEngine {
    /// Open a file-backed store with default pool settings.
    pub fn open(path: &Path) -> HealthTrackResult<Self> {
        Self::from_config(&StorageConfig {
            db_path: path.to_string_lossy().into_owned(),
            ..StorageConfig::default()
        })
    }

    pub fn from_config(config: &StorageConfig) -> HealthTrackResult<Self> {
        let path = Path::new(&config.db_path);
        let pool = ConnectionPool::open(path, config.read_pool_size, config.busy_timeout_ms)?;
        let engine = Self { pool };
        engine.initialize()?;
        tracing::info!(
            path = %config.db_path,
            readers = config.read_pool_size,
            "storage engine opened"
        );
        Ok(engine)
    }

    /// Open an in-memory store (for testing). All reads go through the
    /// writer.
    pub fn open_in_memory() -> HealthTrackResult<Self> {
        let engine = Self {
            pool: ConnectionPool::open_in_memory()?,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> HealthTrackResult<()> {
        self.pool.writer.with_conn(migrations::run_migrations)
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    /// Schema version currently applied.
    pub fn schema_version(&self) -> HealthTrackResult<u32> {
        self.pool.writer.with_conn(migrations::current_version)
    }

    /// Run `f` on a read connection inside a storage span.
    fn with_reader<F, T>(&self, operation: &str, f: F) -> HealthTrackResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> HealthTrackResult<T>,
    {
        let span = storage_span!(operation);
        let _guard = span.enter();
        match &self.pool.readers {
            Some(readers) => readers.with_conn(f),
            None => self.pool.writer.with_conn(f),
        }
    }

    /// Run `f` on the writer inside a storage span.
    fn with_writer<F, T>(&self, operation: &str, f: F) -> HealthTrackResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> HealthTrackResult<T>,
    {
        let span = storage_span!(operation);
        let _guard = span.enter();
        self.pool.writer.with_conn(f)
    }
}

impl IDataStore for StorageEngine {
    fn create_child(&self, child: &NewChild) -> HealthTrackResult<Child> {
        self.with_writer("insert_child", |conn| child_ops::insert_child(conn, child))
    }

    fn get_child(&self, id: &str) -> HealthTrackResult<Option<Child>> {
        self.with_reader("get_child", |conn| child_ops::get_child(conn, id))
    }

    fn list_children(&self, filter: &ChildFilter) -> HealthTrackResult<Vec<Child>> {
        self.with_reader("list_children", |conn| child_ops::list_children(conn, filter))
    }

    fn create_health_record(&self, record: &NewHealthRecord) -> HealthTrackResult<HealthRecord> {
        self.with_writer("insert_record", |conn| record_ops::insert_record(conn, record))
    }

    fn list_health_records(&self, child_id: &str) -> HealthTrackResult<Vec<HealthRecord>> {
        self.with_reader("list_records", |conn| record_ops::list_records(conn, child_id))
    }

    fn create_health_worker(&self, worker: &NewHealthWorker) -> HealthTrackResult<HealthWorker> {
        self.with_writer("insert_worker", |conn| health_worker_ops::insert_worker(conn, worker))
    }

    fn get_health_worker(&self, id: &str) -> HealthTrackResult<Option<HealthWorker>> {
        self.with_reader("get_worker", |conn| health_worker_ops::get_worker(conn, id))
    }

    fn find_health_worker_by_user(&self, user_id: &str) -> HealthTrackResult<Option<HealthWorker>> {
        self.with_reader("find_worker_by_user", |conn| health_worker_ops::find_by_user(conn, user_id))
    }

    fn list_health_workers(&self) -> HealthTrackResult<Vec<HealthWorker>> {
        self.with_reader("list_workers", health_worker_ops::list_workers)
    }

    fn count_health_workers(&self) -> HealthTrackResult<usize> {
        self.with_reader("count_workers", health_worker_ops::count_workers)
    }

    fn remove_health_worker(&self, id: &str) -> HealthTrackResult<bool> {
        self.with_writer("delete_worker", |conn| health_worker_ops::delete_worker(conn, id))
    }

    fn get_profile_by_user(&self, user_id: &str) -> HealthTrackResult<Option<Profile>> {
        self.with_reader("get_profile_by_user", |conn| profile_ops::get_by_user(conn, user_id))
    }

    fn create_profile(&self, profile: &NewProfile) -> HealthTrackResult<Profile> {
        self.with_writer("insert_profile", |conn| profile_ops::insert_profile(conn, profile))
    }

    fn status_counts(&self, filter: &ReportFilter) -> HealthTrackResult<Vec<CenterStatusCounts>> {
        self.with_reader("status_counts", |conn| aggregation::status_counts(conn, filter))
    }
}
