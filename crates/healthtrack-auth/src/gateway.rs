//! LocalAuthGateway: in-process identity provider over DashMap.

use std::sync::{LazyLock, Mutex, MutexGuard};

use chrono::{Duration, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use regex::Regex;
use tokio::sync::broadcast;

use healthtrack_core::config::AuthConfig;
use healthtrack_core::errors::AuthError;
use healthtrack_core::models::{AuthEvent, AuthUser, Credentials, Session, SignUpRequest};
use healthtrack_core::traits::IAuthGateway;
use healthtrack_observability::auth_span;

use crate::password::PasswordHash;

/// Buffered auth events per subscriber before it starts lagging.
const EVENT_CAPACITY: usize = 32;

/// Upper bound on session lifetime (one year).
const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 3_600;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

struct Account {
    user: AuthUser,
    password: PasswordHash,
}

/// Accounts keyed by lowercase email, sessions keyed by access token.
/// One session at a time is the client's active session.
pub struct LocalAuthGateway {
    accounts: DashMap<String, Account>,
    /// Email local part -> email, for username sign-in.
    usernames: DashMap<String, String>,
    sessions: DashMap<String, Session>,
    active: Mutex<Option<Session>>,
    events: broadcast::Sender<AuthEvent>,
    min_password_length: usize,
    session_ttl: Duration,
}

impl LocalAuthGateway {
    pub fn new(config: &AuthConfig) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            accounts: DashMap::new(),
            usernames: DashMap::new(),
            sessions: DashMap::new(),
            active: Mutex::new(None),
            events,
            min_password_length: config.min_password_length,
            session_ttl: Duration::seconds(config.session_ttl_secs.min(MAX_SESSION_TTL_SECS) as i64),
        }
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    /// Resolve an access token to its user.
    pub fn validate_token(&self, token: &str) -> Result<AuthUser, AuthError> {
        let session = self
            .sessions
            .get(token)
            .map(|s| s.clone())
            .ok_or(AuthError::InvalidCredentials)?;
        if session.is_expired_at(Utc::now()) {
            self.sessions.remove(token);
            return Err(AuthError::SessionExpired);
        }
        Ok(session.user)
    }

    fn resolve_email(&self, login: &str) -> Option<String> {
        let login = login.trim().to_lowercase();
        if login.contains('@') {
            Some(login)
        } else {
            self.usernames.get(&login).map(|email| email.clone())
        }
    }

    fn issue_session(&self, user: AuthUser) -> Session {
        let session = Session {
            access_token: uuid::Uuid::new_v4().to_string(),
            user,
            expires_at: Utc::now() + self.session_ttl,
        };
        self.sessions
            .insert(session.access_token.clone(), session.clone());

        let previous = self.set_active(Some(session.clone()));
        if let Some(previous) = previous {
            self.sessions.remove(&previous.access_token);
        }
        // No receivers is fine.
        let _ = self.events.send(AuthEvent::SignedIn(session.clone()));
        session
    }

    fn lock_active(&self) -> MutexGuard<'_, Option<Session>> {
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn set_active(&self, session: Option<Session>) -> Option<Session> {
        std::mem::replace(&mut *self.lock_active(), session)
    }
}

impl Default for LocalAuthGateway {
    fn default() -> Self {
        Self::new(&AuthConfig::default())
    }
}

fn validate_email(email: &str) -> Result<(), AuthError> {
    let valid = EMAIL_PATTERN
        .as_ref()
        .map(|re| re.is_match(email))
        .unwrap_or_else(|| email.contains('@'));
    if valid {
        Ok(())
    } else {
        Err(AuthError::InvalidEmail {
            email: email.to_string(),
        })
    }
}

impl IAuthGateway for LocalAuthGateway {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let span = auth_span!("sign_in");
        let _guard = span.enter();
        let email = self
            .resolve_email(&credentials.login)
            .ok_or(AuthError::InvalidCredentials)?;
        let user = {
            let account = self
                .accounts
                .get(&email)
                .ok_or(AuthError::InvalidCredentials)?;
            if !account.password.verify(&credentials.password) {
                tracing::debug!(email = %email, "password mismatch");
                return Err(AuthError::InvalidCredentials);
            }
            account.user.clone()
        };

        tracing::info!(user_id = %user.id, "signed in");
        Ok(self.issue_session(user))
    }

    fn sign_up(&self, request: &SignUpRequest) -> Result<Session, AuthError> {
        let span = auth_span!("sign_up");
        let _guard = span.enter();
        let user = self.create_user(request)?;
        Ok(self.issue_session(user))
    }

    fn create_user(&self, request: &SignUpRequest) -> Result<AuthUser, AuthError> {
        let email = request.email.trim().to_lowercase();
        validate_email(&email)?;
        if request.password.chars().count() < self.min_password_length {
            return Err(AuthError::WeakPassword {
                min_length: self.min_password_length,
            });
        }

        let user = match self.accounts.entry(email.clone()) {
            Entry::Occupied(_) => return Err(AuthError::AlreadyRegistered { email }),
            Entry::Vacant(slot) => {
                let user = AuthUser {
                    id: uuid::Uuid::new_v4().to_string(),
                    email: email.clone(),
                    metadata: request.metadata.clone(),
                };
                slot.insert(Account {
                    user: user.clone(),
                    password: PasswordHash::new(&request.password),
                });
                user
            }
        };
        // First account wins a shared local part; later ones sign in by email.
        self.usernames
            .entry(user.email_local_part().to_string())
            .or_insert(email);

        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    fn sign_out(&self) {
        let span = auth_span!("sign_out");
        let _guard = span.enter();
        if let Some(session) = self.set_active(None) {
            self.sessions.remove(&session.access_token);
            tracing::info!(user_id = %session.user.id, "signed out");
            let _ = self.events.send(AuthEvent::SignedOut);
        }
    }

    /// The active session. An expired one is dropped here and announced as
    /// `SignedOut`; its token stays until `validate_token` reports it expired.
    fn current_session(&self) -> Option<Session> {
        let now = Utc::now();
        let mut active = self.lock_active();
        if !active.as_ref().is_some_and(|s| s.is_expired_at(now)) {
            return active.clone();
        }
        let expired = active.take();
        drop(active);

        if let Some(session) = expired {
            tracing::info!(user_id = %session.user.id, "session expired");
            let _ = self.events.send(AuthEvent::SignedOut);
        }
        None
    }

    fn subscribe(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }
}
