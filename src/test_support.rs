//! Test-only `tracing` layer recording the level and target of each event.

use std::sync::{Arc, Mutex};

use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub(crate) type Events = Vec<(tracing::Level, String)>;

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Events>>);

impl<S: Subscriber> Layer<S> for Recorder {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        self.0
            .lock()
            .unwrap()
            .push((*meta.level(), meta.target().to_string()));
    }
}

/// Runs `f` under a thread-local subscriber and returns every event it emitted.
pub(crate) fn capture<R>(f: impl FnOnce() -> R) -> (R, Events) {
    let recorder = Recorder::default();
    let subscriber = tracing_subscriber::registry().with(recorder.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let events = recorder.0.lock().unwrap().clone();
    (out, events)
}
