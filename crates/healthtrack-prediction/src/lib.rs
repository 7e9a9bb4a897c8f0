//! # healthtrack-prediction
//!
//! Heuristic nutrition-status predictor. Measurements select a severity tier,
//! each class draws a probability from that tier's range, and the three draws
//! are normalized into a distribution.
//!
//! ## Severity tiers (first match wins)
//!
//! | Tier | Trigger |
//! |------|---------|
//! | Severe | edema, BMI < 16, poverty > 7, sanitation > 7, meals < 2 |
//! | Moderate | BMI < 18.5, poverty > 5, sanitation > 5, meals < 3 |
//! | Normal | otherwise |
//!
//! ## Entropy
//!
//! Draws come from an [`EntropySource`]. Production uses an OS-seeded
//! `StdRng`; tests seed it or replay a fixed sequence.

pub mod engine;
pub mod entropy;
pub mod tiers;

pub use engine::{RawPrediction, StatusPredictor};
pub use entropy::{EntropySource, SequenceEntropy};
pub use tiers::{DrawRange, SeverityTier, TierRanges};
