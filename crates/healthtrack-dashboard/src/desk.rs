//! HealthWorkerDesk: the signed-in worker's center.

use std::sync::Arc;

use chrono::Utc;

use healthtrack_core::errors::{HealthTrackError, HealthTrackResult};
use healthtrack_core::models::{
    CenterStatusCounts, Child, ChildFilter, CurrentUser, HealthRecord, HealthWorker, NewChild,
    NewHealthRecord, ReportFilter, Role,
};
use healthtrack_core::traits::{IDataStore, IPredictor};
use healthtrack_observability::{events, prediction_span};

use crate::forms::{ChildRegistration, MeasurementForm};
use crate::guard::require_role;

pub struct HealthWorkerDesk {
    store: Arc<dyn IDataStore>,
    predictor: Arc<dyn IPredictor>,
    user: CurrentUser,
}

impl HealthWorkerDesk {
    /// Fails with `AccessDenied` unless `user` is a health worker.
    pub fn new(
        user: CurrentUser,
        store: Arc<dyn IDataStore>,
        predictor: Arc<dyn IPredictor>,
    ) -> HealthTrackResult<Self> {
        require_role(&user, Role::HealthWorker)?;
        Ok(Self {
            store,
            predictor,
            user,
        })
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    fn center(&self) -> HealthTrackResult<&str> {
        self.user
            .awc_center
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or(HealthTrackError::MissingCenter)
    }

    fn worker(&self) -> HealthTrackResult<HealthWorker> {
        self.store
            .find_health_worker_by_user(&self.user.id)?
            .ok_or_else(|| HealthTrackError::HealthWorkerNotFound {
                key: self.user.id.clone(),
            })
    }

    /// A child in this worker's center. Children elsewhere read as missing.
    fn own_child(&self, child_id: &str) -> HealthTrackResult<Child> {
        let center = self.center()?;
        self.store
            .get_child(child_id)?
            .filter(|c| c.awc_center == center)
            .ok_or_else(|| HealthTrackError::ChildNotFound {
                id: child_id.to_string(),
            })
    }

    /// Register a child under this worker and center with status `normal`.
    pub fn register_child(&self, form: &ChildRegistration) -> HealthTrackResult<Child> {
        let today = Utc::now().date_naive();
        let valid = form.validate(today)?;
        let center = self.center()?;
        let worker = self.worker()?;

        let child = self.store.create_child(&NewChild {
            name: valid.name,
            date_of_birth: valid.date_of_birth,
            gender: valid.gender,
            guardian_name: valid.guardian_name,
            city: valid.city,
            district: valid.district,
            awc_center: center.to_string(),
            healthworker_id: Some(worker.id),
        })?;
        events::child_registered(&child.id, &child.awc_center, child.age_on(today));
        Ok(child)
    }

    /// Children in this center, newest first, optionally searched by child
    /// or guardian name.
    pub fn child_records(&self, search: Option<&str>) -> HealthTrackResult<Vec<Child>> {
        let mut filter = ChildFilter::new().center(self.center()?);
        if let Some(text) = search {
            filter = filter.search(text);
        }
        self.store.list_children(&filter)
    }

    pub fn health_records(&self, child_id: &str) -> HealthTrackResult<Vec<HealthRecord>> {
        self.own_child(child_id)?;
        self.store.list_health_records(child_id)
    }

    /// Predict from the form and store the record; the child's status
    /// follows the prediction.
    pub fn add_health_record(
        &self,
        child_id: &str,
        form: &MeasurementForm,
    ) -> HealthTrackResult<HealthRecord> {
        let measurements = form.parse()?;
        let child = self.own_child(child_id)?;

        let span = prediction_span!(child_id);
        let _guard = span.enter();

        let prediction = self.predictor.predict(&measurements)?;
        let p = prediction.probabilities;
        events::status_predicted(prediction.status.as_str(), p.sam, p.mam, p.normal);

        let worker = self.worker()?;
        let record = self.store.create_health_record(&NewHealthRecord {
            child_id: child.id,
            measurements,
            prediction,
            recorded_by: Some(worker.id),
        })?;
        events::health_record_created(&record.id, &record.child_id, record.predicted_status.as_str());
        Ok(record)
    }

    /// Status counts for this center.
    pub fn center_summary(&self) -> HealthTrackResult<CenterStatusCounts> {
        let center = self.center()?;
        let counts = self.store.status_counts(&ReportFilter {
            center: Some(center.to_string()),
            created_since: None,
        })?;
        Ok(counts
            .into_iter()
            .next()
            .unwrap_or_else(|| CenterStatusCounts::new(center)))
    }
}
