//! Admin-facing records: the user-approval queue and hostel roll-ups.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered account, as listed in the admin approval queue and the
/// all-users listing. `approval_status` is `pending` until an admin acts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingUser {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub role: String,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub caretaker_id: Option<String>,
    #[serde(default)]
    pub hostel_name: Option<String>,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    pub approval_status: String,
    pub created_at: DateTime<Utc>,
}

/// Per-hostel occupancy summary from `GET /api/admin/hostels`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelSummary {
    pub name: String,
    #[serde(rename = "studentCount")]
    pub student_count: u64,
}
