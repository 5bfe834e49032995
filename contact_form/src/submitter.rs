use std::sync::Arc;

use common::{
    constants::{
        COLLECTION_MESSAGES_NAME, EMAIL_INPUT_ID, INVALID_FORM_NOTICE, MESSAGE_INPUT_ID,
        NAME_INPUT_ID, THANKS_NOTICE,
    },
    messages::Submission,
    traits::{DocumentRef, DocumentStore},
};
use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{debug, error, info, warn};

use crate::{
    traits::{FormDocument, Page},
    validation::validate,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitterConfig {
    pub collection: String,
    pub name_input_id: String,
    pub email_input_id: String,
    pub message_input_id: String,
}

impl Default for SubmitterConfig {
    fn default() -> Self {
        Self {
            collection: COLLECTION_MESSAGES_NAME.into(),
            name_input_id: NAME_INPUT_ID.into(),
            email_input_id: EMAIL_INPUT_ID.into(),
            message_input_id: MESSAGE_INPUT_ID.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitterState {
    Idle,
    Submitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    Stored(DocumentRef),
    /// The write failed, only the log knows about it
    Failed,
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Rejected,
    Dispatched(JoinHandle<PersistOutcome>),
}

pub struct FormSubmitter {
    config: SubmitterConfig,
    store: Arc<dyn DocumentStore>,
    page: Arc<dyn Page>,
    state: Mutex<SubmitterState>,
}

impl FormSubmitter {
    pub fn new(
        config: SubmitterConfig,
        store: Arc<dyn DocumentStore>,
        page: Arc<dyn Page>,
    ) -> Self {
        Self {
            config,
            store,
            page,
            state: Mutex::new(SubmitterState::Idle),
        }
    }

    pub async fn state(&self) -> SubmitterState {
        *self.state.lock().await
    }

    /// Click handler of the submit control
    pub async fn submit(&self, document: &dyn FormDocument) -> SubmitOutcome {
        let name = document.get_element_by_id(&self.config.name_input_id);
        let email = document.get_element_by_id(&self.config.email_input_id);
        let message = document.get_element_by_id(&self.config.message_input_id);

        let (Some(name), Some(email), Some(message)) = (name, email, message) else {
            warn!("Contact form is missing one of its inputs");

            self.page.alert(INVALID_FORM_NOTICE);
            return SubmitOutcome::Rejected;
        };

        if !validate(name, email, message) {
            debug!("Contact form failed validation");

            self.page.alert(INVALID_FORM_NOTICE);
            return SubmitOutcome::Rejected;
        }

        let submission = Submission::new(
            name.value().to_string(),
            email.value().to_string(),
            message.value().to_string(),
        );

        SubmitOutcome::Dispatched(self.persist(submission).await)
    }

    /// Writes `submission` once, in the background. The returned handle can
    /// be awaited or aborted; nothing here applies a timeout or retries.
    pub async fn persist(&self, submission: Submission) -> JoinHandle<PersistOutcome> {
        *self.state.lock().await = SubmitterState::Submitting;

        let store = self.store.clone();
        let page = self.page.clone();
        let collection = self.config.collection.clone();

        tokio::spawn(async move {
            match store.put(&collection, submission).await {
                Ok(document) => {
                    info!("Message sent, ID: {}", document.id);

                    page.alert(THANKS_NOTICE);
                    page.reload();

                    PersistOutcome::Stored(document)
                }
                Err(err) => {
                    // the user is not told about this
                    error!("Message could not be sent: {err}");

                    PersistOutcome::Failed
                }
            }
        })
    }
}
