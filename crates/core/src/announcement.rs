//! Announcement records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::UserRef;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub priority: String,
    /// Role the announcement targets (`all`, `student`, `caretaker`, ...).
    pub target_role: String,
    #[serde(default)]
    pub target_hostel: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_pinned: Option<bool>,
    pub created_by: String,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub creator: Option<UserRef>,
}
