use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Identity anchor. Owns every timetable entry and attendance record.
///
/// `credential_hash` is opaque to this crate; hashing happens upstream.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub credential_hash: String,
    pub fullname: Option<String>,
    pub department: Option<String>,
    pub semester: Option<String>,
    pub batch: Option<String>,
    pub roll_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Registration input.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub credential_hash: String,
    #[serde(default)]
    pub fullname: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub roll_number: Option<String>,
}

impl NewUser {
    #[must_use]
    pub fn new(email: impl Into<String>, credential_hash: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            credential_hash: credential_hash.into(),
            ..Self::default()
        }
    }

    /// Email as stored: trimmed and lower-cased.
    #[must_use]
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    /// Check the required fields.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank or `@`-less email, or a blank
    /// credential hash.
    pub fn validate(&self) -> Result<(), CoreError> {
        let email = self.normalized_email();
        if email.is_empty() {
            return Err(CoreError::validation("email is required"));
        }
        if !email.contains('@') {
            return Err(CoreError::Validation(format!("invalid email '{email}'")));
        }
        if self.credential_hash.trim().is_empty() {
            return Err(CoreError::validation("credential hash is required"));
        }
        Ok(())
    }
}

/// Case-insensitive email key.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
