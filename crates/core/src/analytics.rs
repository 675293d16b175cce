//! Aggregated analytics payloads.
//!
//! The dashboard stats use the nested structure only; the flat aliases the
//! old web client also accepted are gone.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IssueStats {
    pub total: u64,
    pub pending: u64,
    pub this_month: u64,
    pub last_month: u64,
    /// Month-over-month change, percent.
    pub trend: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UserStats {
    pub total: u64,
    pub pending_approvals: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AnnouncementStats {
    pub active: u64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LostFoundStats {
    pub open: u64,
}

/// Payload of `GET /api/analytics/dashboard`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DashboardStats {
    pub issues: IssueStats,
    pub users: UserStats,
    pub announcements: AnnouncementStats,
    pub lost_found: LostFoundStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityCount {
    pub priority: String,
    pub count: u64,
}

/// Payload of `GET /api/analytics/issues-summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuesSummary {
    #[serde(rename = "byStatus")]
    pub by_status: Vec<StatusCount>,
    #[serde(rename = "byCategory")]
    pub by_category: Vec<CategoryCount>,
    #[serde(rename = "byPriority")]
    pub by_priority: Vec<PriorityCount>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryHours {
    pub category: String,
    #[serde(rename = "averageHours")]
    pub average_hours: f64,
}

/// Payload of `GET /api/analytics/resolution-time`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionTime {
    #[serde(rename = "averageHours")]
    pub average_hours: f64,
    #[serde(rename = "byCategory")]
    pub by_category: Vec<CategoryHours>,
}

/// One row of `GET /api/analytics/category-frequency`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFrequency {
    pub category: String,
    pub count: u64,
    pub percentage: f64,
}

/// One row of `GET /api/analytics/hostel-density`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostelDensity {
    pub hostel: String,
    #[serde(rename = "totalIssues")]
    pub total_issues: u64,
    pub pending: u64,
    pub resolved: u64,
}

/// One row of `GET /api/analytics/status-trends`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTrend {
    /// ISO week label, e.g. `2026-W05`.
    pub week: String,
    pub created: u64,
    pub resolved: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_stats_nested_shape() {
        let stats: DashboardStats = serde_json::from_value(json!({
            "issues": {"total": 120, "pending": 14, "this_month": 22, "last_month": 18, "trend": 22.2},
            "users": {"total": 340, "pending_approvals": 5},
            "announcements": {"active": 7},
            "lost_found": {"open": 11}
        }))
        .expect("valid stats");
        assert_eq!(stats.issues.pending, 14);
        assert_eq!(stats.users.pending_approvals, 5);
    }

    #[test]
    fn test_issues_summary_wire_names() {
        let summary: IssuesSummary = serde_json::from_value(json!({
            "byStatus": [{"status": "pending", "count": 3}],
            "byCategory": [{"category": "plumbing", "count": 2}],
            "byPriority": [{"priority": "high", "count": 1}]
        }))
        .expect("valid summary");
        assert_eq!(summary.by_status[0].count, 3);
        assert_eq!(summary.by_category[0].category, "plumbing");
    }
}
