//! HealthTrack: one handle over store, identity gateway, predictor, and
//! the signed-in user.

use std::sync::Arc;

use healthtrack_auth::{AuthContext, LocalAuthGateway};
use healthtrack_core::config::HealthTrackConfig;
use healthtrack_core::errors::HealthTrackResult;
use healthtrack_core::models::{NewProfile, Profile, Role, SignUpRequest, UserMetadata};
use healthtrack_core::traits::{IAuthGateway, IDataStore, IPredictor};
use healthtrack_observability::init_tracing;
use healthtrack_prediction::StatusPredictor;
use healthtrack_storage::StorageEngine;

use crate::admin::AdminConsole;
use crate::desk::HealthWorkerDesk;
use crate::guard::require_user;

pub struct HealthTrack {
    config: HealthTrackConfig,
    store: Arc<dyn IDataStore>,
    gateway: Arc<dyn IAuthGateway>,
    predictor: Arc<dyn IPredictor>,
    auth: Arc<AuthContext>,
}

impl HealthTrack {
    pub fn new(
        config: HealthTrackConfig,
        store: Arc<dyn IDataStore>,
        gateway: Arc<dyn IAuthGateway>,
        predictor: Arc<dyn IPredictor>,
    ) -> Self {
        let auth = AuthContext::new(gateway.clone(), store.clone(), &config.auth);
        Self {
            config,
            store,
            gateway,
            predictor,
            auth,
        }
    }

    /// File-backed store, local gateway, predictor from config. Installs
    /// the tracing subscriber.
    pub fn open(config: HealthTrackConfig) -> HealthTrackResult<Self> {
        init_tracing(&config.observability);
        let store = Arc::new(StorageEngine::from_config(&config.storage)?);
        Ok(Self::with_store(config, store))
    }

    /// Same as [`HealthTrack::open`] over an in-memory store.
    pub fn open_in_memory(config: HealthTrackConfig) -> HealthTrackResult<Self> {
        let store = Arc::new(StorageEngine::open_in_memory()?);
        Ok(Self::with_store(config, store))
    }

    fn with_store(config: HealthTrackConfig, store: Arc<StorageEngine>) -> Self {
        let gateway = Arc::new(LocalAuthGateway::new(&config.auth));
        let predictor = Arc::new(StatusPredictor::from_config(&config.prediction));
        Self::new(config, store, gateway, predictor)
    }

    pub fn config(&self) -> &HealthTrackConfig {
        &self.config
    }

    pub fn auth(&self) -> &Arc<AuthContext> {
        &self.auth
    }

    pub fn store(&self) -> &Arc<dyn IDataStore> {
        &self.store
    }

    pub fn gateway(&self) -> &Arc<dyn IAuthGateway> {
        &self.gateway
    }

    /// Create an admin account with its profile. Admins are never
    /// self-registered.
    pub fn seed_admin(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> HealthTrackResult<Profile> {
        let user = self.gateway.create_user(&SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            metadata: UserMetadata {
                full_name: Some(full_name.to_string()),
                role: Some(Role::Admin),
                awc_center: None,
            },
        })?;
        let profile = self.store.create_profile(&NewProfile {
            user_id: user.id.clone(),
            role: Role::Admin,
            full_name: full_name.to_string(),
            username: Some(user.email_local_part().to_string()),
            awc_center: None,
        })?;
        tracing::info!(user_id = %user.id, "admin account seeded");
        Ok(profile)
    }

    /// Admin screens for the signed-in user.
    pub fn admin_console(&self) -> HealthTrackResult<AdminConsole> {
        let user = require_user(self.auth.current_user())?;
        AdminConsole::new(
            user,
            self.store.clone(),
            self.gateway.clone(),
            &self.config.auth,
        )
    }

    /// Health-worker screens for the signed-in user.
    pub fn health_worker_desk(&self) -> HealthTrackResult<HealthWorkerDesk> {
        let user = require_user(self.auth.current_user())?;
        HealthWorkerDesk::new(user, self.store.clone(), self.predictor.clone())
    }
}
