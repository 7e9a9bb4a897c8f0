use tokio::sync::broadcast;

use crate::errors::AuthError;
use crate::models::{AuthEvent, AuthUser, Credentials, Session, SignUpRequest};

/// Identity provider: sign-in, sign-up, sign-out, and session-change
/// notifications.
pub trait IAuthGateway: Send + Sync {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;
    /// Register an account and sign it in.
    fn sign_up(&self, request: &SignUpRequest) -> Result<Session, AuthError>;
    /// Register an account without touching the active session. Used when
    /// an admin issues credentials to someone else.
    fn create_user(&self, request: &SignUpRequest) -> Result<AuthUser, AuthError>;
    fn sign_out(&self);
    /// The active, unexpired session, if any.
    fn current_session(&self) -> Option<Session>;
    /// Subscribe to session changes.
    fn subscribe(&self) -> broadcast::Receiver<AuthEvent>;
}
