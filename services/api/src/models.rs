//! API models for request and response payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Reminder entity
///
/// `id` is optional on input since the store assigns it. `owner_id` is set
/// from the caller's identity and is never taken from a request body. A
/// missing `title` reads as empty and is left for the service to refuse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Reminder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub remind_at: Option<DateTime<Utc>>,
}

impl Reminder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: None,
            owner_id: None,
            title: title.into(),
            description: None,
            remind_at: None,
        }
    }
}

/// Query parameters for title search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub title: Option<String>,
}
