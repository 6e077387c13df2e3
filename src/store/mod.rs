//! Document storage behind the resource service.
//!
//! The store is a narrow trait so the service can be wired against a real
//! database client at startup; [`MemoryStore`] backs tests and local runs.
//! Storage handles are constructed explicitly and passed in, never held in
//! process-wide state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::StoreError;

mod memory;

pub use memory::MemoryStore;

/// A stored document: a JSON body plus the service-assigned identifier and
/// creation/update timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    #[serde(rename = "_id")]
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub body: Map<String, Value>,
}

impl Document {
    /// Stamps a fully-formed body with a generated id and UTC timestamps.
    pub fn new(body: Map<String, Value>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            body,
        }
    }

    /// Equality match of every filter key against the document body.
    pub fn matches(&self, filter: &Map<String, Value>) -> bool {
        filter.iter().all(|(key, value)| self.body.get(key) == Some(value))
    }
}

/// Generic document CRUD surface consumed by the resource service.
pub trait DocumentStore: Send + Sync {
    /// Inserts one fully-formed document into a collection as a single atomic
    /// write, returning the stored document with its assigned identity.
    fn insert(&self, collection: &str, body: Map<String, Value>) -> Result<Document, StoreError>;

    /// Lists documents matching an equality filter, up to `limit`.
    fn list(
        &self,
        collection: &str,
        filter: &Map<String, Value>,
        limit: usize,
    ) -> Result<Vec<Document>, StoreError>;

    /// Names of the collections currently present, used as a health probe.
    fn collection_names(&self) -> Result<Vec<String>, StoreError>;
}
