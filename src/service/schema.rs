//! Flat record schemas for the non-callflow resources. These carry no
//! internal structure; validation is basic field typing plus email syntax.

use email_address::EmailAddress;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

fn default_true() -> bool {
    true
}

/// An organization owning users, numbers, endpoints and callflows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tenant {
    pub name: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    #[default]
    Agent,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub tenant_id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default = "default_true")]
    pub active: bool,
}

/// A provisioned phone number in E.164 form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Number {
    pub tenant_id: String,
    pub e164: String,
    #[serde(default)]
    pub provider: Option<String>,
    /// User or callflow id the number routes to.
    #[serde(default)]
    pub assigned_to: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointKind {
    Sip,
    Webrtc,
}

/// A registrable device or softphone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Endpoint {
    pub tenant_id: String,
    pub kind: EndpointKind,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// A contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::FieldConstraintViolation {
            field: field.to_string(),
            message: "must be a non-empty string".to_string(),
        });
    }
    Ok(())
}

fn require_email(field: &str, value: &str) -> Result<(), ValidationError> {
    if !EmailAddress::is_valid(value) {
        return Err(ValidationError::FieldConstraintViolation {
            field: field.to_string(),
            message: format!("'{}' is not a valid email address", value),
        });
    }
    Ok(())
}

impl Tenant {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)
    }
}

impl User {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("tenant_id", &self.tenant_id)?;
        require_email("email", &self.email)
    }
}

impl Number {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("tenant_id", &self.tenant_id)?;
        require_non_empty("e164", &self.e164)
    }
}

impl Endpoint {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("tenant_id", &self.tenant_id)?;
        require_non_empty("username", &self.username)
    }
}

impl Lead {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_empty("name", &self.name)?;
        require_email("email", &self.email)
    }
}
