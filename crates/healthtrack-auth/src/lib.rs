//! # healthtrack-auth
//!
//! An in-process identity provider (`LocalAuthGateway`), the signed-in
//! user projection (`AuthContext`), and health-worker credential issuing.

pub mod context;
pub mod credentials;
pub mod gateway;
pub mod password;

pub use context::AuthContext;
pub use credentials::{generate_password, generate_username, IssuedCredentials};
pub use gateway::LocalAuthGateway;
pub use password::PasswordHash;
