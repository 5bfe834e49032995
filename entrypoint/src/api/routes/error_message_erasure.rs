use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error(transparent)]
    JsonExtractorRejection(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::JsonExtractorRejection(rejection) => (rejection.status(), rejection.body_text()),
        };

        debug!("Failed to parse incoming request: {}, {}", status, message);

        StatusCode::BAD_REQUEST.into_response()
    }
}
