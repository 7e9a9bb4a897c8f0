use std::sync::Arc;

use chrono::NaiveDate;
use healthtrack_core::errors::HealthTrackError;
use healthtrack_core::models::{CurrentUser, NewHealthWorker, NutritionStatus, Role};
use healthtrack_core::traits::IDataStore;
use healthtrack_dashboard::{ChildRegistration, HealthWorkerDesk, MeasurementForm};
use healthtrack_prediction::StatusPredictor;
use healthtrack_storage::StorageEngine;

const USER_ID: &str = "worker-user-1";

fn make_user(center: Option<&str>) -> CurrentUser {
    CurrentUser {
        id: USER_ID.to_string(),
        email: "health001@healthtrack.local".to_string(),
        username: Some("health001".to_string()),
        role: Role::HealthWorker,
        full_name: "Sunita".to_string(),
        awc_center: center.map(str::to_string),
    }
}

fn make_desk(center: Option<&str>) -> (Arc<StorageEngine>, HealthWorkerDesk) {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    store
        .create_health_worker(&NewHealthWorker {
            full_name: "Sunita".to_string(),
            awc_center: center.unwrap_or("AWC-1").to_string(),
            username: "health001".to_string(),
            user_id: Some(USER_ID.to_string()),
        })
        .unwrap();
    let predictor = Arc::new(StatusPredictor::seeded(42));
    let desk = HealthWorkerDesk::new(make_user(center), store.clone(), predictor).unwrap();
    (store, desk)
}

fn make_registration(name: &str, guardian: &str) -> ChildRegistration {
    ChildRegistration {
        name: name.to_string(),
        date_of_birth: "2021-07-15".to_string(),
        gender: "male".to_string(),
        guardian_name: guardian.to_string(),
        city: "Patna".to_string(),
        district: "Patna".to_string(),
    }
}

fn form(height: &str, weight: &str, poverty: &str, sanitation: &str, meals: &str) -> MeasurementForm {
    MeasurementForm {
        height: height.to_string(),
        weight: weight.to_string(),
        edema: false,
        poverty_index: poverty.to_string(),
        sanitation_index: sanitation.to_string(),
        meals_per_day: meals.to_string(),
    }
}

#[test]
fn desk_requires_healthworker_role() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let mut user = make_user(Some("AWC-1"));
    user.role = Role::Admin;
    let err = HealthWorkerDesk::new(user, store, Arc::new(StatusPredictor::seeded(1)))
        .err()
        .unwrap();
    assert!(matches!(err, HealthTrackError::AccessDenied { .. }));
}

#[test]
fn registered_child_belongs_to_worker_and_center() {
    let (store, desk) = make_desk(Some("AWC-1"));
    let child = desk.register_child(&make_registration("Rohan", "Kavita")).unwrap();

    assert_eq!(child.awc_center, "AWC-1");
    assert_eq!(child.current_status, NutritionStatus::Normal);
    let worker = store.find_health_worker_by_user(USER_ID).unwrap().unwrap();
    assert_eq!(child.healthworker_id, Some(worker.id));
    assert_eq!(child.age_on(NaiveDate::from_ymd_opt(2024, 7, 14).unwrap()), 2);
    assert_eq!(child.age_on(NaiveDate::from_ymd_opt(2024, 7, 15).unwrap()), 3);
}

#[test]
fn registration_without_center_fails() {
    let (store, desk) = make_desk(None);
    let err = desk.register_child(&make_registration("Rohan", "Kavita")).unwrap_err();
    assert!(matches!(err, HealthTrackError::MissingCenter));
    assert_eq!(err.to_string(), "AWC Center not found for your account");
    assert!(store.list_children(&Default::default()).unwrap().is_empty());
}

#[test]
fn registration_validates_fields() {
    let (_, desk) = make_desk(Some("AWC-1"));
    let err = desk.register_child(&make_registration("", "Kavita")).unwrap_err();
    assert!(matches!(err, HealthTrackError::ValidationError(_)));
}

#[test]
fn registration_needs_a_worker_row() {
    let store = Arc::new(StorageEngine::open_in_memory().unwrap());
    let desk = HealthWorkerDesk::new(
        make_user(Some("AWC-1")),
        store.clone(),
        Arc::new(StatusPredictor::seeded(3)),
    )
    .unwrap();
    let err = desk.register_child(&make_registration("Rohan", "Kavita")).unwrap_err();
    assert!(matches!(err, HealthTrackError::HealthWorkerNotFound { .. }));
}

#[test]
fn child_records_are_scoped_and_searchable() {
    let (store, desk) = make_desk(Some("AWC-1"));
    desk.register_child(&make_registration("Rohan", "Kavita")).unwrap();
    desk.register_child(&make_registration("Isha", "Rohini")).unwrap();
    desk.register_child(&make_registration("Dev", "Asha")).unwrap();

    // Another center's child stays invisible.
    store
        .create_child(&healthtrack_core::models::NewChild {
            name: "Rohit".to_string(),
            date_of_birth: chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            gender: healthtrack_core::models::Gender::Male,
            guardian_name: "X".to_string(),
            city: "Y".to_string(),
            district: "Z".to_string(),
            awc_center: "AWC-2".to_string(),
            healthworker_id: None,
        })
        .unwrap();

    let all = desk.child_records(None).unwrap();
    let names: Vec<_> = all.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Dev", "Isha", "Rohan"]);

    let hits = desk.child_records(Some("roh")).unwrap();
    let mut names: Vec<_> = hits.iter().map(|c| c.name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["Isha", "Rohan"]);
}

#[test]
fn severe_measurements_flag_child_as_sam() {
    let (store, desk) = make_desk(Some("AWC-1"));
    let child = desk.register_child(&make_registration("Rohan", "Kavita")).unwrap();

    let record = desk
        .add_health_record(&child.id, &form("70", "6", "1", "1", "3"))
        .unwrap();
    assert_eq!(record.predicted_status, NutritionStatus::Sam);
    assert!(record.sam_probability > record.mam_probability);
    assert!(record.sam_probability > record.normal_probability);
    let sum = record.sam_probability + record.mam_probability + record.normal_probability;
    assert!((sum - 1.0).abs() < 1e-3);

    let worker = store.find_health_worker_by_user(USER_ID).unwrap().unwrap();
    assert_eq!(record.recorded_by, Some(worker.id));
    assert_eq!(
        store.get_child(&child.id).unwrap().unwrap().current_status,
        NutritionStatus::Sam
    );

    let summary = desk.center_summary().unwrap();
    assert_eq!(summary.sam_count, 1);
    assert_eq!(summary.total_count, 1);
}

#[test]
fn moderate_then_normal_visits() {
    let (_, desk) = make_desk(Some("AWC-1"));
    let child = desk.register_child(&make_registration("Isha", "Rohini")).unwrap();

    let mam = desk
        .add_health_record(&child.id, &form("90", "13", "6", "2", "3"))
        .unwrap();
    assert_eq!(mam.predicted_status, NutritionStatus::Mam);

    let normal = desk
        .add_health_record(&child.id, &form("100", "20", "2", "2", "4"))
        .unwrap();
    assert_eq!(normal.predicted_status, NutritionStatus::Normal);

    let history = desk.health_records(&child.id).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, normal.id);
    assert_eq!(history[1].id, mam.id);
}

#[test]
fn invalid_measurements_store_nothing() {
    let (_, desk) = make_desk(Some("AWC-1"));
    let child = desk.register_child(&make_registration("Dev", "Asha")).unwrap();

    let err = desk
        .add_health_record(&child.id, &form("0", "6", "1", "1", "3"))
        .unwrap_err();
    assert!(matches!(err, HealthTrackError::ValidationError(_)));
    assert!(desk.health_records(&child.id).unwrap().is_empty());
}

#[test]
fn other_centers_children_read_as_missing() {
    let (_, desk) = make_desk(Some("AWC-1"));
    let err = desk.health_records("someone-else").unwrap_err();
    assert!(matches!(err, HealthTrackError::ChildNotFound { .. }));

    let err = desk
        .add_health_record("someone-else", &form("90", "13", "6", "2", "3"))
        .unwrap_err();
    assert!(matches!(err, HealthTrackError::ChildNotFound { .. }));
}

#[test]
fn empty_center_summary_is_zero() {
    let (_, desk) = make_desk(Some("AWC-1"));
    let summary = desk.center_summary().unwrap();
    assert_eq!(summary.awc_center, "AWC-1");
    assert_eq!(summary.total_count, 0);
}
