//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and functions from the novapbx
//! crate. Import this module to get access to the core functionality without
//! having to import each type individually.

// Callflow model
pub use crate::callflow::{
    Callflow, CallflowNode, CallflowPayload, NodeAction, NodeKind, NodePayload, Traversal,
    ValidatedCallflow, ValidationWarning, validate,
};

// Storage and service
pub use crate::service::{
    ApiResponse, Endpoint, EndpointKind, Lead, Number, ResourceService, ResponseData, Tenant, User,
    UserRole,
};
pub use crate::store::{Document, DocumentStore, MemoryStore};

// Error types
pub use crate::error::{ServiceError, StoreError, ValidationError};
