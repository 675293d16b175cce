//! Maintenance issue records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Abbreviated user embedded in records that reference one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// A reported maintenance issue.
///
/// `category`, `priority` and `status` are free-form server-controlled
/// vocabularies; the client does not constrain them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: String,
    pub status: String,
    pub hostel_name: String,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub reported_by: String,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub resolved_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub reporter: Option<UserRef>,
    #[serde(default)]
    pub assignee: Option<UserRef>,
}
