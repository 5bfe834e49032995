use common::errors::StoreError;
use mongodb::{bson::Bson, error::ErrorKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("MongoDB driver error: {0}")]
    Driver(#[from] mongodb::error::Error),
    #[error("Inserted document has an unsupported _id: {0}")]
    UnsupportedDocumentId(Bson),
}

impl ConnectorError {
    pub(crate) fn into_store_error(self, collection: &str) -> StoreError {
        match self {
            Self::Driver(err) => match err.kind.as_ref() {
                ErrorKind::ServerSelection { .. } | ErrorKind::Io(_) => {
                    StoreError::Unreachable(err.to_string())
                }
                _ => StoreError::WriteRejected {
                    collection: collection.to_string(),
                    reason: err.to_string(),
                },
            },
            Self::UnsupportedDocumentId(id) => StoreError::InvalidDocumentId(id.to_string()),
        }
    }
}
