use ahash::AHashMap;
use serde_json::{Map, Value};
use std::sync::RwLock;

use super::{Document, DocumentStore};
use crate::error::StoreError;

/// An in-memory document store. Collections are created lazily on first
/// insert, mirroring document-database behavior.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<AHashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in a collection.
    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }
}

impl DocumentStore for MemoryStore {
    fn insert(&self, collection: &str, body: Map<String, Value>) -> Result<Document, StoreError> {
        let document = Document::new(body);
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::CollectionUnavailable(collection.to_string()))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());
        log::debug!(
            "Inserted document '{}' into collection '{}'",
            document.id,
            collection
        );
        Ok(document)
    }

    fn list(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::CollectionUnavailable(collection.to_string()))?;
        let items = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|d| d.matches(filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(items)
    }

    fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::CollectionUnavailable("*".to_string()))?;
        let mut names: Vec<String> = collections.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}
