use std::sync::Arc;

use axum::{Json, debug_handler, extract::State, http::StatusCode};
use axum_extra::extract::WithRejection;
use common::deserialize_empty_string::null_as_empty_string;
use contact_form::{
    page::ContactPage,
    submitter::{FormSubmitter, PersistOutcome, SubmitOutcome},
};
use metrics::{Metrics, put_metric};
use serde::Deserialize;
use tracing::error;

use crate::{
    ServerState,
    notifications::{PageActions, ResponsePage},
    routes::error_message_erasure::ApiError,
};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Payload {
    #[serde(default, deserialize_with = "null_as_empty_string")]
    name_input: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    email_input: String,
    #[serde(default, deserialize_with = "null_as_empty_string")]
    msg_input: String,
}

#[debug_handler]
pub(crate) async fn contact_handler(
    State(state): State<Arc<ServerState>>,
    WithRejection(Json(json), _): WithRejection<Json<Payload>, ApiError>,
) -> Result<Json<PageActions>, StatusCode> {
    let document = ContactPage::with_values(&json.name_input, &json.email_input, &json.msg_input);
    let page = Arc::new(ResponsePage::default());

    let submitter = FormSubmitter::new(
        state.submitter_config.clone(),
        state.store.clone(),
        page.clone(),
    );

    let metric = match submitter.submit(&document).await {
        SubmitOutcome::Rejected => Metrics::ContactRejected,
        SubmitOutcome::Dispatched(handle) => match handle.await {
            Ok(PersistOutcome::Stored(_)) => Metrics::ContactPersisted,
            Ok(PersistOutcome::Failed) => Metrics::ContactPersistFailed,
            Err(err) => {
                error!("Persist task did not complete: {err}");

                return Err(StatusCode::INTERNAL_SERVER_ERROR);
            }
        },
    };

    if state.emit_metrics {
        put_metric!(metric, 1);
    }

    Ok(Json(page.actions()))
}
