pub mod child;
pub mod filters;
pub mod health_record;
pub mod health_worker;
pub mod measurements;
pub mod profile;
pub mod report;
pub mod session;
pub mod status;

pub use child::{age_in_years, Child, Gender, NewChild};
pub use filters::{ChildFilter, ReportFilter};
pub use health_record::{HealthRecord, NewHealthRecord};
pub use health_worker::{HealthWorker, NewHealthWorker};
pub use measurements::Measurements;
pub use profile::{NewProfile, Profile, Role};
pub use report::CenterStatusCounts;
pub use session::{AuthEvent, AuthUser, Credentials, CurrentUser, Session, SignUpRequest, UserMetadata};
pub use status::{NutritionStatus, Prediction, StatusProbabilities};
