//! # healthtrack-dashboard
//!
//! The workflows behind the admin and health-worker screens:
//!
//! - [`AdminConsole`]: issue health-worker accounts, browse children across
//!   centers, status reports.
//! - [`HealthWorkerDesk`]: register children and record visits for the
//!   signed-in worker's center.
//! - [`HealthTrack`]: wires store, gateway, predictor, and auth context.
//!
//! Operations return `HealthTrackResult`; [`Notification::from_error`]
//! turns failures into the message shown to the user.

pub mod admin;
pub mod app;
pub mod desk;
pub mod forms;
pub mod guard;
pub mod notification;
pub mod reports;

pub use admin::AdminConsole;
pub use app::HealthTrack;
pub use desk::HealthWorkerDesk;
pub use forms::{ChildRegistration, MeasurementForm};
pub use guard::{require_role, require_user};
pub use notification::{Notification, NotificationVariant};
pub use reports::{CenterReport, DashboardSummary, ReportWindow, StatusSummary};
