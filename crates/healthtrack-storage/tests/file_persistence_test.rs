use chrono::NaiveDate;
use healthtrack_core::config::StorageConfig;
use healthtrack_core::models::{ChildFilter, Gender, NewChild};
use healthtrack_core::traits::IDataStore;
use healthtrack_storage::migrations::LATEST_VERSION;
use healthtrack_storage::pool::pragmas::verify_wal_mode;
use healthtrack_storage::StorageEngine;

fn make_child(name: &str) -> NewChild {
    NewChild {
        name: name.to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(2021, 8, 20).unwrap(),
        gender: Gender::Male,
        guardian_name: "Guardian".to_string(),
        city: "Bhopal".to_string(),
        district: "Bhopal".to_string(),
        awc_center: "AWC-1".to_string(),
        healthworker_id: None,
    }
}

#[test]
fn data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("healthtrack.db");

    let id = {
        let storage = StorageEngine::open(&path).unwrap();
        storage.create_child(&make_child("Arjun")).unwrap().id
    };

    let reopened = StorageEngine::open(&path).unwrap();
    let child = reopened.get_child(&id).unwrap().expect("persisted");
    assert_eq!(child.name, "Arjun");
    assert_eq!(reopened.schema_version().unwrap(), LATEST_VERSION);
}

#[test]
fn read_pool_sees_writer_commits() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig {
        db_path: dir.path().join("pool.db").to_string_lossy().into_owned(),
        read_pool_size: 3,
        ..StorageConfig::default()
    };
    let storage = StorageEngine::from_config(&config).unwrap();
    assert_eq!(storage.pool().readers.as_ref().map(|r| r.size()), Some(3));

    for i in 0..5 {
        storage.create_child(&make_child(&format!("child-{i}"))).unwrap();
        // Each list hits a different reader in turn.
        let listed = storage.list_children(&ChildFilter::new()).unwrap();
        assert_eq!(listed.len(), i + 1);
    }
}

#[test]
fn file_backed_store_uses_wal() {
    let dir = tempfile::tempdir().unwrap();
    let storage = StorageEngine::open(&dir.path().join("wal.db")).unwrap();
    let wal = storage.pool().writer.with_conn(verify_wal_mode).unwrap();
    assert!(wal);
}

#[test]
fn in_memory_store_has_no_read_pool() {
    let storage = StorageEngine::open_in_memory().unwrap();
    assert!(storage.pool().readers.is_none());
    assert!(storage.pool().db_path.is_none());
}
