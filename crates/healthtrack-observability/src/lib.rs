//! # healthtrack-observability
//!
//! Tracing subscriber setup plus the structured events and spans the
//! application emits.

pub mod tracing_setup;

pub use tracing_setup::{default_filter, events, init_tracing, LOG_ENV_VAR};
