pub mod aggregation;
pub mod child_ops;
pub mod codec;
pub mod health_worker_ops;
pub mod profile_ops;
pub mod record_ops;
