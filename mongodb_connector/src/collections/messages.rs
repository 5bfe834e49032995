use common::{messages::Submission, traits::DocumentRef};
use mongodb::{Collection, Database, bson::Bson};
use tracing::debug;

use crate::errors::ConnectorError;

pub(crate) struct MessagesCollection {
    collection: Collection<Submission>,
}

impl MessagesCollection {
    pub(crate) fn new(db: &Database, name: &str) -> Self {
        Self {
            collection: db.collection::<Submission>(name),
        }
    }

    pub(crate) async fn create_if_missing(db: &Database, name: &str) -> Result<(), ConnectorError> {
        let existing = db.list_collection_names().await?;

        if existing.iter().any(|collection| collection == name) {
            return Ok(());
        }

        debug!("Creating {name} collection");

        db.create_collection(name).await?;

        Ok(())
    }

    pub(crate) async fn insert_submission(
        &self,
        submission: Submission,
    ) -> Result<DocumentRef, ConnectorError> {
        let result = self.collection.insert_one(submission).await?;

        document_ref_from_id(result.inserted_id)
    }
}

pub(crate) fn document_ref_from_id(id: Bson) -> Result<DocumentRef, ConnectorError> {
    match id {
        Bson::ObjectId(object_id) => Ok(DocumentRef {
            id: object_id.to_hex(),
        }),
        Bson::String(id) => Ok(DocumentRef { id }),
        other => Err(ConnectorError::UnsupportedDocumentId(other)),
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::{Bson, oid::ObjectId};

    use super::document_ref_from_id;
    use crate::errors::ConnectorError;

    #[test]
    fn object_id_is_hex_encoded() {
        let object_id = ObjectId::new();

        let document_ref = document_ref_from_id(Bson::ObjectId(object_id)).unwrap();

        assert_eq!(document_ref.id, object_id.to_hex());
    }

    #[test]
    fn string_id_is_kept() {
        let document_ref = document_ref_from_id(Bson::String("abc".into())).unwrap();

        assert_eq!(document_ref.id, "abc");
    }

    #[test]
    fn other_ids_are_rejected() {
        let result = document_ref_from_id(Bson::Boolean(true));

        assert!(matches!(
            result,
            Err(ConnectorError::UnsupportedDocumentId(Bson::Boolean(true)))
        ));
    }
}
