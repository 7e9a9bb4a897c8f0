use std::fmt;
use std::sync::{Arc, Mutex};

use healthtrack_auth::LocalAuthGateway;
use healthtrack_core::models::{Credentials, SignUpRequest, UserMetadata};
use healthtrack_core::traits::IAuthGateway;
use healthtrack_observability::tracing_setup::spans::names;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id};
use tracing::Subscriber;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

type Seen = Arc<Mutex<Vec<(String, String)>>>;

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
fn session_changes_open_auth_spans() {
    let seen: Seen = Arc::default();
    let subscriber = tracing_subscriber::registry().with(SpanRecorder(seen.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let gateway = LocalAuthGateway::default();
        gateway
            .sign_up(&SignUpRequest {
                email: "nisha@example.org".to_string(),
                password: "secret1".to_string(),
                metadata: UserMetadata::default(),
            })
            .unwrap();
        gateway.sign_out();
        gateway
            .sign_in(&Credentials {
                login: "nisha".to_string(),
                password: "secret1".to_string(),
            })
            .unwrap();
    });

    let seen = seen.lock().unwrap();
    let actions: Vec<&str> = seen
        .iter()
        .filter(|(name, _)| name == names::AUTH)
        .map(|(_, action)| action.as_str())
        .collect();
    assert_eq!(actions, vec!["sign_up", "sign_out", "sign_in"]);
}
