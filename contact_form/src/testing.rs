use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use common::{
    errors::StoreError,
    messages::Submission,
    traits::{DocumentRef, DocumentStore},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{Layer, layer::Context};

use crate::{
    traits::{FormDocument, InputElement, Page},
    validity::ValidityState,
};

pub(crate) struct TestInput {
    value: String,
    valid: bool,
}

impl TestInput {
    pub(crate) fn new(value: &str, valid: bool) -> Self {
        Self {
            value: value.to_string(),
            valid,
        }
    }
}

impl InputElement for TestInput {
    fn value(&self) -> &str {
        &self.value
    }

    fn validity(&self) -> ValidityState {
        ValidityState {
            value_missing: !self.valid,
            ..Default::default()
        }
    }
}

#[derive(Default)]
pub(crate) struct TestDocument {
    inputs: HashMap<String, TestInput>,
}

impl TestDocument {
    pub(crate) fn with(mut self, id: &str, value: &str, valid: bool) -> Self {
        self.inputs.insert(id.to_string(), TestInput::new(value, valid));
        self
    }
}

impl FormDocument for TestDocument {
    fn get_element_by_id(&self, id: &str) -> Option<&dyn InputElement> {
        self.inputs.get(id).map(|input| input as &dyn InputElement)
    }
}

pub(crate) enum StoreBehaviour {
    Resolve,
    Reject,
}

pub(crate) struct FakeStore {
    behaviour: StoreBehaviour,
    writes: Mutex<Vec<(String, Submission)>>,
}

impl FakeStore {
    pub(crate) fn new(behaviour: StoreBehaviour) -> Arc<Self> {
        Arc::new(Self {
            behaviour,
            writes: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn writes(&self) -> Vec<(String, Submission)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl DocumentStore for FakeStore {
    async fn put(&self, collection: &str, record: Submission) -> Result<DocumentRef, StoreError> {
        let mut writes = self.writes.lock().unwrap();
        writes.push((collection.to_string(), record));

        match self.behaviour {
            StoreBehaviour::Resolve => Ok(DocumentRef {
                id: format!("doc-{}", writes.len()),
            }),
            StoreBehaviour::Reject => Err(StoreError::Unreachable("network is down".into())),
        }
    }
}

#[derive(Default)]
pub(crate) struct RecordingPage {
    alerts: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl RecordingPage {
    pub(crate) fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub(crate) fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl Page for RecordingPage {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

/// Counts ERROR level events
#[derive(Clone, Default)]
pub(crate) struct ErrorCounter {
    count: Arc<AtomicUsize>,
}

impl ErrorCounter {
    pub(crate) fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}
