//! The resource service: generic create/list operations over tenants, users,
//! numbers, endpoints, leads and callflows, persisting into an injected
//! [`DocumentStore`].
//!
//! Every create is one atomic insert of a fully-formed document. Callflow
//! creation is the only operation with structural validation; the other
//! resources are flat records checked for field typing only.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::callflow::{Callflow, CallflowPayload, validate};
use crate::error::{ServiceError, StoreError};
use crate::store::DocumentStore;

pub mod response;
pub mod schema;

pub use response::{ApiResponse, ResponseData};
pub use schema::{Endpoint, EndpointKind, Lead, Number, Tenant, User, UserRole};

/// Default page size for list operations.
pub const DEFAULT_LIST_LIMIT: usize = 50;

/// Generic create/list handlers over an explicitly injected document store.
pub struct ResourceService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> ResourceService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Quick check that the store is reachable.
    pub fn ping(&self) -> ApiResponse {
        match self.store.collection_names() {
            Ok(_) => ApiResponse::health(true, "OK"),
            Err(e) => ApiResponse::failure(format!("DB error: {}", e)),
        }
    }

    pub fn create_tenant(&self, tenant: Tenant) -> Result<ApiResponse, ServiceError> {
        tenant.validate()?;
        let doc = self.insert("tenant", &tenant)?;
        Ok(ApiResponse::created("Tenant created", doc.id))
    }

    pub fn list_tenants(&self) -> Result<ApiResponse, ServiceError> {
        self.list("tenant", None)
    }

    pub fn create_user(&self, user: User) -> Result<ApiResponse, ServiceError> {
        user.validate()?;
        let doc = self.insert("user", &user)?;
        Ok(ApiResponse::created("User created", doc.id))
    }

    pub fn list_users(&self, tenant_id: Option<&str>) -> Result<ApiResponse, ServiceError> {
        self.list("user", tenant_id)
    }

    pub fn create_number(&self, number: Number) -> Result<ApiResponse, ServiceError> {
        number.validate()?;
        let doc = self.insert("number", &number)?;
        Ok(ApiResponse::created("Number added", doc.id))
    }

    pub fn list_numbers(&self, tenant_id: Option<&str>) -> Result<ApiResponse, ServiceError> {
        self.list("number", tenant_id)
    }

    pub fn create_endpoint(&self, endpoint: Endpoint) -> Result<ApiResponse, ServiceError> {
        endpoint.validate()?;
        let doc = self.insert("endpoint", &endpoint)?;
        Ok(ApiResponse::created("Endpoint created", doc.id))
    }

    pub fn list_endpoints(&self, tenant_id: Option<&str>) -> Result<ApiResponse, ServiceError> {
        self.list("endpoint", tenant_id)
    }

    pub fn create_lead(&self, lead: Lead) -> Result<ApiResponse, ServiceError> {
        lead.validate()?;
        let doc = self.insert("lead", &lead)?;
        Ok(ApiResponse::created("Lead captured", doc.id))
    }

    /// Converts the wire payload into the typed model, runs structural
    /// validation, and persists the validated definition as one document.
    /// Nothing is written when validation fails.
    pub fn create_callflow(&self, payload: CallflowPayload) -> Result<ApiResponse, ServiceError> {
        let callflow = Callflow::try_from(payload)?;
        let validated = validate(callflow)?;
        for warning in validated.warnings() {
            log::warn!(
                "Callflow '{}': {}",
                validated.callflow().name,
                warning
            );
        }
        let stored = CallflowPayload::from(validated.callflow());
        let doc = self.insert("callflow", &stored)?;
        log::info!(
            "Created callflow '{}' for tenant '{}' ({} nodes)",
            validated.callflow().name,
            validated.callflow().tenant_id,
            validated.callflow().nodes.len()
        );
        Ok(ApiResponse::created("Callflow created", doc.id))
    }

    pub fn list_callflows(&self, tenant_id: Option<&str>) -> Result<ApiResponse, ServiceError> {
        self.list("callflow", tenant_id)
    }

    fn insert<T: Serialize>(
        &self,
        collection: &str,
        record: &T,
    ) -> Result<crate::store::Document, ServiceError> {
        let body = to_body(collection, record)?;
        Ok(self.store.insert(collection, body)?)
    }

    fn list(
        &self,
        collection: &str,
        tenant_id: Option<&str>,
    ) -> Result<ApiResponse, ServiceError> {
        let mut filter = Map::new();
        if let Some(tenant_id) = tenant_id {
            filter.insert(
                "tenant_id".to_string(),
                Value::String(tenant_id.to_string()),
            );
        }
        let items = self.store.list(collection, &filter, DEFAULT_LIST_LIMIT)?;
        Ok(ApiResponse::listing(items))
    }
}

fn to_body<T: Serialize>(collection: &str, record: &T) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(StoreError::Serialization {
            collection: collection.to_string(),
            message: format!("expected a JSON object, got {}", other),
        }),
        Err(e) => Err(StoreError::Serialization {
            collection: collection.to_string(),
            message: e.to_string(),
        }),
    }
}
