//! Request and response shapes for the `User` resource.
//!
//! `UserCreate` and `UserResponse` embed [`UserBase`] and flatten it on the
//! wire, so all three read as one flat JSON object. `id`, `created_at` and
//! `updated_at` only ever come from a persisted [`UserRecord`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Fields shared by every user shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserBase {
    #[validate(email)]
    pub email: String,
    pub name: String,
}

impl UserBase {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }
}

/// Payload for creating a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserCreate {
    #[serde(flatten)]
    #[validate(nested)]
    pub base: UserBase,
}

impl UserCreate {
    pub fn new(base: UserBase) -> Self {
        Self { base }
    }
}

/// Partial update. A `None` field is left unchanged by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct UserUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

/// A user row as handed over by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(flatten)]
    pub base: UserBase,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Copied attribute by attribute; records are trusted and not re-validated.
impl From<UserRecord> for UserResponse {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            base: UserBase {
                email: record.email,
                name: record.name,
            },
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
