use std::fmt;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use healthtrack_core::models::{ChildFilter, Gender, NewChild};
use healthtrack_core::traits::IDataStore;
use healthtrack_observability::tracing_setup::spans::names;
use healthtrack_storage::StorageEngine;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

type Seen = Arc<Mutex<Vec<(String, String)>>>;

/// Records (span name, field value) for every span opened.
struct SpanRecorder(Seen);

struct FieldValue(String);

impl Visit for FieldValue {
    fn record_debug(&mut self, _field: &Field, value: &dyn fmt::Debug) {
        self.0 = format!("{value:?}");
    }
}

impl<S: Subscriber> Layer<S> for SpanRecorder {
    fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
        let mut value = FieldValue(String::new());
        attrs.record(&mut value);
        self.0
            .lock()
            .unwrap()
            .push((attrs.metadata().name().to_string(), value.0));
    }
}

#[test]
fn store_operations_open_storage_spans() {
    let seen: Seen = Arc::default();
    let subscriber = tracing_subscriber::registry().with(SpanRecorder(seen.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let storage = StorageEngine::open_in_memory().unwrap();
        storage
            .create_child(&NewChild {
                name: "Asha".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(2021, 3, 14).unwrap(),
                gender: Gender::Female,
                guardian_name: "Meena".to_string(),
                city: "Nagpur".to_string(),
                district: "Nagpur".to_string(),
                awc_center: "AWC-1".to_string(),
                healthworker_id: None,
            })
            .unwrap();
        storage.list_children(&ChildFilter::new()).unwrap();
    });

    let seen = seen.lock().unwrap();
    let storage_ops: Vec<&str> = seen
        .iter()
        .filter(|(name, _)| name == names::STORAGE)
        .map(|(_, op)| op.as_str())
        .collect();
    assert_eq!(storage_ops, vec!["insert_child", "list_children"]);
}
