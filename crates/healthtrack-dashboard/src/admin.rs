//! AdminConsole: health-worker accounts, cross-center views, reports.

use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;

use chrono::Utc;

use healthtrack_auth::credentials::{account_email, generate_password, generate_username};
use healthtrack_auth::IssuedCredentials;
use healthtrack_core::config::AuthConfig;
use healthtrack_core::errors::{HealthTrackError, HealthTrackResult, ValidationError};
use healthtrack_core::models::{
    Child, ChildFilter, CurrentUser, HealthWorker, NewHealthWorker, NewProfile, ReportFilter,
    Role, SignUpRequest, UserMetadata,
};
use healthtrack_core::traits::{IAuthGateway, IDataStore};
use healthtrack_observability::events;

use crate::guard::require_role;
use crate::reports::{CenterReport, DashboardSummary, ReportWindow};

pub struct AdminConsole {
    store: Arc<dyn IDataStore>,
    gateway: Arc<dyn IAuthGateway>,
    config: AuthConfig,
    user: CurrentUser,
}

impl AdminConsole {
    /// Fails with `AccessDenied` unless `user` is an admin.
    pub fn new(
        user: CurrentUser,
        store: Arc<dyn IDataStore>,
        gateway: Arc<dyn IAuthGateway>,
        config: &AuthConfig,
    ) -> HealthTrackResult<Self> {
        require_role(&user, Role::Admin)?;
        Ok(Self {
            store,
            gateway,
            config: config.clone(),
            user,
        })
    }

    pub fn user(&self) -> &CurrentUser {
        &self.user
    }

    /// Create the sign-in account, worker row, and profile for a new
    /// health worker, and return the credentials to hand over.
    pub fn register_health_worker(
        &self,
        full_name: &str,
        awc_center: &str,
    ) -> HealthTrackResult<IssuedCredentials> {
        let full_name = full_name.trim();
        let awc_center = awc_center.trim();
        if full_name.is_empty() {
            return Err(ValidationError::missing("full_name").into());
        }
        if awc_center.is_empty() {
            return Err(ValidationError::missing("awc_center").into());
        }

        let username = self.next_username()?;
        let password = generate_password(
            &mut rand::thread_rng(),
            self.config.generated_password_length,
        );
        let email = account_email(&username, &self.config.account_email_domain);

        let auth_user = self.gateway.create_user(&SignUpRequest {
            email: email.clone(),
            password: password.clone(),
            metadata: UserMetadata {
                full_name: Some(full_name.to_string()),
                role: Some(Role::HealthWorker),
                awc_center: Some(awc_center.to_string()),
            },
        })?;

        let worker = self.store.create_health_worker(&NewHealthWorker {
            full_name: full_name.to_string(),
            awc_center: awc_center.to_string(),
            username: username.clone(),
            user_id: Some(auth_user.id.clone()),
        })?;
        self.store.create_profile(&NewProfile {
            user_id: auth_user.id,
            role: Role::HealthWorker,
            full_name: full_name.to_string(),
            username: Some(username.clone()),
            awc_center: Some(awc_center.to_string()),
        })?;

        events::health_worker_registered(&worker.id, &username, awc_center);
        Ok(IssuedCredentials {
            username,
            password,
            email,
        })
    }

    /// Count-based username, skipping ahead past any already taken.
    fn next_username(&self) -> HealthTrackResult<String> {
        let workers = self.store.list_health_workers()?;
        let taken: HashSet<&str> = workers.iter().map(|w| w.username.as_str()).collect();
        let mut registered = workers.len();
        loop {
            let candidate = generate_username(&self.config.username_prefix, registered);
            if !taken.contains(candidate.as_str()) {
                return Ok(candidate);
            }
            registered += 1;
        }
    }

    pub fn list_health_workers(&self) -> HealthTrackResult<Vec<HealthWorker>> {
        self.store.list_health_workers()
    }

    /// Children they registered are kept, unlinked.
    pub fn remove_health_worker(&self, id: &str) -> HealthTrackResult<()> {
        if self.store.remove_health_worker(id)? {
            tracing::info!(worker_id = %id, "health worker removed");
            Ok(())
        } else {
            Err(HealthTrackError::HealthWorkerNotFound {
                key: id.to_string(),
            })
        }
    }

    /// Children across all centers, newest first.
    pub fn view_children(&self, filter: &ChildFilter) -> HealthTrackResult<Vec<Child>> {
        self.store.list_children(filter)
    }

    /// Distinct centers that have registered children, sorted.
    pub fn centers(&self) -> HealthTrackResult<Vec<String>> {
        let children = self.store.list_children(&ChildFilter::new())?;
        let centers: BTreeSet<String> = children.into_iter().map(|c| c.awc_center).collect();
        Ok(centers.into_iter().collect())
    }

    pub fn report(&self, filter: &ReportFilter) -> HealthTrackResult<CenterReport> {
        Ok(CenterReport::from_counts(self.store.status_counts(filter)?))
    }

    /// Report for one center (or all) over a registration window.
    pub fn report_window(
        &self,
        center: Option<&str>,
        window: ReportWindow,
    ) -> HealthTrackResult<CenterReport> {
        self.report(&window.filter(center, Utc::now()))
    }

    pub fn dashboard_summary(&self) -> HealthTrackResult<DashboardSummary> {
        let report = self.report(&ReportFilter::default())?;
        let mut summary = DashboardSummary {
            total_health_workers: self.store.count_health_workers()? as u64,
            total_children: report.total(),
            ..DashboardSummary::default()
        };
        for counts in &report.by_center {
            summary.sam_count += counts.sam_count;
            summary.mam_count += counts.mam_count;
            summary.normal_count += counts.normal_count;
        }
        Ok(summary)
    }
}
