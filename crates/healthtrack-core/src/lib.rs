//! # healthtrack-core
//!
//! Foundation crate for the HealthTrack nutrition dashboard.
//! Defines all models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HealthTrackConfig;
pub use errors::{HealthTrackError, HealthTrackResult};
pub use models::{
    Child, CurrentUser, HealthRecord, HealthWorker, Measurements, NutritionStatus, Prediction,
    Profile, Role, StatusProbabilities,
};
