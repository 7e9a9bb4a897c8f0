//! AuthContext: the signed-in user as the application sees it.
//!
//! Subscribes to the gateway once, and on every session change resolves
//! the auth user to a profile, creating a default `healthworker` profile
//! on first sign-in.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use healthtrack_core::config::AuthConfig;
use healthtrack_core::errors::{AuthError, HealthTrackResult};
use healthtrack_core::models::{
    AuthEvent, AuthUser, Credentials, CurrentUser, NewProfile, Role, SignUpRequest, UserMetadata,
};
use healthtrack_core::traits::{IAuthGateway, IDataStore};
use healthtrack_observability::events;

pub struct AuthContext {
    gateway: Arc<dyn IAuthGateway>,
    store: Arc<dyn IDataStore>,
    default_full_name: String,
    /// Written only by the event listener.
    user: watch::Sender<Option<CurrentUser>>,
    started: AtomicBool,
}

impl AuthContext {
    pub fn new(
        gateway: Arc<dyn IAuthGateway>,
        store: Arc<dyn IDataStore>,
        config: &AuthConfig,
    ) -> Arc<Self> {
        let (user, _) = watch::channel(None);
        Arc::new(Self {
            gateway,
            store,
            default_full_name: config.default_full_name.clone(),
            user,
            started: AtomicBool::new(false),
        })
    }

    /// Spawn the listener task. Only the first call subscribes; later calls
    /// return `None`. Must be called inside a tokio runtime.
    pub fn start(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }
        // Subscribe before reading the current session so nothing is missed.
        let mut rx = self.gateway.subscribe();
        let ctx = Arc::clone(self);
        Some(tokio::spawn(async move {
            ctx.sync_from_gateway();
            loop {
                match rx.recv().await {
                    Ok(event) => ctx.handle_event(&event),
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(skipped, "auth listener lagged, resyncing");
                        ctx.sync_from_gateway();
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }))
    }

    /// Apply one session change to the projection.
    pub fn handle_event(&self, event: &AuthEvent) {
        match event {
            AuthEvent::SignedIn(session) => match self.resolve_user(&session.user) {
                Ok(current) => {
                    events::auth_state_changed(Some(&current.id), true);
                    self.user.send_replace(Some(current));
                }
                Err(e) => {
                    // Keep the previous projection.
                    events::data_access_failed("resolve_profile", &e.to_string());
                }
            },
            AuthEvent::SignedOut => {
                events::auth_state_changed(None, false);
                self.user.send_replace(None);
            }
        }
    }

    fn sync_from_gateway(&self) {
        match self.gateway.current_session() {
            Some(session) => self.handle_event(&AuthEvent::SignedIn(session)),
            None => {
                self.user.send_replace(None);
            }
        }
    }

    /// Profile for `user`, creating the default one if none exists yet.
    pub fn resolve_user(&self, user: &AuthUser) -> HealthTrackResult<CurrentUser> {
        if let Some(profile) = self.store.get_profile_by_user(&user.id)? {
            return Ok(CurrentUser::from_profile(user, &profile));
        }

        let full_name = user
            .metadata
            .full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(self.default_full_name.as_str())
            .to_string();
        let profile = self.store.create_profile(&NewProfile {
            user_id: user.id.clone(),
            role: Role::HealthWorker,
            full_name,
            username: Some(user.email_local_part().to_string()),
            awc_center: None,
        })?;
        tracing::info!(user_id = %user.id, "created default profile");
        Ok(CurrentUser::from_profile(user, &profile))
    }

    /// The projected user, or `None` once the gateway no longer holds a
    /// live session (an expiry the listener has not applied yet included).
    pub fn current_user(&self) -> Option<CurrentUser> {
        self.gateway.current_session()?;
        self.user.borrow().clone()
    }

    /// Wait until the projection satisfies `predicate`, then return it.
    pub async fn wait_for<F>(&self, mut predicate: F) -> Option<CurrentUser>
    where
        F: FnMut(Option<&CurrentUser>) -> bool,
    {
        let mut rx = self.user.subscribe();
        let found = match rx.wait_for(|user| predicate(user.as_ref())).await {
            Ok(user) => (*user).clone(),
            Err(_) => self.current_user(),
        };
        found
    }

    pub fn login(&self, credentials: &Credentials) -> Result<(), AuthError> {
        self.gateway.sign_in(credentials).map(|_| ())
    }

    pub fn signup(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        role: Role,
        awc_center: Option<String>,
    ) -> Result<(), AuthError> {
        self.gateway
            .sign_up(&SignUpRequest {
                email: email.to_string(),
                password: password.to_string(),
                metadata: UserMetadata {
                    full_name: Some(full_name.to_string()),
                    role: Some(role),
                    awc_center,
                },
            })
            .map(|_| ())
    }

    pub fn logout(&self) {
        self.gateway.sign_out();
    }
}
