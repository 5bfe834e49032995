use async_trait::async_trait;
use common::{
    errors::StoreError,
    messages::Submission,
    traits::{DocumentRef, DocumentStore},
};
use mongodb::{Client, Database};
use tracing::{debug, info};

use crate::{collections::messages::MessagesCollection, config::StoreConfig, errors::ConnectorError};

pub struct MongoDBConnector {
    // mongodb structs are already Arc, thread safe
    database: Database,
}

impl MongoDBConnector {
    pub async fn new(config: &StoreConfig) -> Result<Self, ConnectorError> {
        let client = Client::with_uri_str(config.connection_uri()).await?;
        let database = client.database(&config.database);

        MessagesCollection::create_if_missing(&database, &config.collection).await?;

        info!(
            "Connected to {}:{}, database {}, collection {}",
            config.host, config.port, config.database, config.collection
        );

        Ok(Self { database })
    }
}

#[async_trait]
impl DocumentStore for MongoDBConnector {
    async fn put(&self, collection: &str, record: Submission) -> Result<DocumentRef, StoreError> {
        debug!("Inserting submission into {collection}");

        MessagesCollection::new(&self.database, collection)
            .insert_submission(record)
            .await
            .map_err(|err| err.into_store_error(collection))
    }
}
