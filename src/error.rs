use thiserror::Error;

/// Errors that can occur while validating a callflow definition.
///
/// All variants are detected synchronously at submission time; there is no
/// partial success and no deferred reporting.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field '{field}' is invalid: {message}")]
    FieldConstraintViolation { field: String, message: String },

    #[error("Node id '{0}' appears more than once in the callflow")]
    DuplicateNodeId(String),

    #[error("Entry node '{0}' does not exist in the callflow's node set")]
    UnknownEntryNode(String),

    #[error("Node '{from_id}' points to '{next_id}', which does not exist in the callflow")]
    DanglingNodeReference { from_id: String, next_id: String },
}

/// Storage-layer failures. These are a separate class from validation errors
/// and are surfaced by the resource service as a generic failure response.
#[derive(Error, Debug, Clone)]
pub enum StoreError {
    #[error("Collection '{0}' is unavailable")]
    CollectionUnavailable(String),

    #[error("Failed to write document to collection '{collection}': {message}")]
    WriteFailed { collection: String, message: String },

    #[error("Failed to serialize document for collection '{collection}': {message}")]
    Serialization { collection: String, message: String },
}

/// Errors returned by resource service operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// `true` when the failure was caused by the submitted payload rather
    /// than the storage layer, i.e. should be reported as a client error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }
}
