use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::Document;

/// The generic envelope wrapping every service response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    pub timestamp: DateTime<Utc>,
}

/// Payload shapes carried by the envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Created { id: String },
    Listing { items: Vec<Document> },
    Health { db: bool },
}

impl ApiResponse {
    pub fn created(message: impl Into<String>, id: String) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(ResponseData::Created { id }),
            timestamp: Utc::now(),
        }
    }

    pub fn listing(items: Vec<Document>) -> Self {
        Self {
            success: true,
            message: "ok".to_string(),
            data: Some(ResponseData::Listing { items }),
            timestamp: Utc::now(),
        }
    }

    pub fn health(db: bool, message: impl Into<String>) -> Self {
        Self {
            success: db,
            message: message.into(),
            data: Some(ResponseData::Health { db }),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: Utc::now(),
        }
    }

    /// The assigned document id, when this is a create response.
    pub fn created_id(&self) -> Option<&str> {
        match &self.data {
            Some(ResponseData::Created { id }) => Some(id),
            _ => None,
        }
    }

    /// The listed documents, when this is a list response.
    pub fn items(&self) -> Option<&[Document]> {
        match &self.data {
            Some(ResponseData::Listing { items }) => Some(items),
            _ => None,
        }
    }
}
