use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document store rejected the write to {collection}: {reason}")]
    WriteRejected { collection: String, reason: String },
    #[error("Document store is unreachable: {0}")]
    Unreachable(String),
    #[error("Document store returned an unexpected document id: {0}")]
    InvalidDocumentId(String),
}
