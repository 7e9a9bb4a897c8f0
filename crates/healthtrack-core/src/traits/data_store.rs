use crate::errors::HealthTrackResult;
use crate::models::{
    CenterStatusCounts, Child, ChildFilter, HealthRecord, HealthWorker, NewChild,
    NewHealthRecord, NewHealthWorker, NewProfile, Profile, ReportFilter,
};

/// Children + health records + health workers + profiles + aggregation.
pub trait IDataStore: Send + Sync {
    // --- Children ---
    fn create_child(&self, child: &NewChild) -> HealthTrackResult<Child>;
    fn get_child(&self, id: &str) -> HealthTrackResult<Option<Child>>;
    /// Children matching `filter`, newest registration first.
    fn list_children(&self, filter: &ChildFilter) -> HealthTrackResult<Vec<Child>>;

    // --- Health records ---
    /// Insert a record and set the owning child's `current_status` to the
    /// record's predicted status. Both writes land together or not at all.
    fn create_health_record(&self, record: &NewHealthRecord) -> HealthTrackResult<HealthRecord>;
    /// Records for one child, most recent first.
    fn list_health_records(&self, child_id: &str) -> HealthTrackResult<Vec<HealthRecord>>;

    // --- Health workers ---
    fn create_health_worker(&self, worker: &NewHealthWorker) -> HealthTrackResult<HealthWorker>;
    fn get_health_worker(&self, id: &str) -> HealthTrackResult<Option<HealthWorker>>;
    fn find_health_worker_by_user(&self, user_id: &str) -> HealthTrackResult<Option<HealthWorker>>;
    fn list_health_workers(&self) -> HealthTrackResult<Vec<HealthWorker>>;
    fn count_health_workers(&self) -> HealthTrackResult<usize>;
    /// Returns false when no worker had this id.
    fn remove_health_worker(&self, id: &str) -> HealthTrackResult<bool>;

    // --- Profiles ---
    fn get_profile_by_user(&self, user_id: &str) -> HealthTrackResult<Option<Profile>>;
    fn create_profile(&self, profile: &NewProfile) -> HealthTrackResult<Profile>;

    // --- Aggregation ---
    /// Current-status counts per center, sorted by center name.
    fn status_counts(&self, filter: &ReportFilter) -> HealthTrackResult<Vec<CenterStatusCounts>>;
}
