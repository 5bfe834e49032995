use async_trait::async_trait;

use crate::{errors::StoreError, messages::Submission};

/// Identifier the store assigned to an inserted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub id: String,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Add `record` as a new document in `collection`
    async fn put(&self, collection: &str, record: Submission) -> Result<DocumentRef, StoreError>;
}
