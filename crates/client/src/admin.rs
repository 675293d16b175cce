//! Admin endpoints: the approval queue, user listing, audit trail and
//! system-wide stats.

use hostelvoice_core::{ApiResponse, HostelSummary, PendingUser};
use serde::Serialize;
use serde_json::Value;

use crate::{ApiClient, ApiResult, Paging};

/// Filters for the all-users listing.
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub role: Option<String>,
    pub approval_status: Option<String>,
    pub search: Option<String>,
}

impl UserFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(role) = &self.role {
            query.push(("role", role.clone()));
        }
        if let Some(status) = &self.approval_status {
            query.push(("approval_status", status.clone()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        query
    }
}

#[derive(Debug, Serialize)]
struct ApproveUser<'a> {
    user_id: &'a str,
}

#[derive(Debug, Serialize)]
struct RejectUser<'a> {
    user_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejection_reason: Option<&'a str>,
}

pub struct AdminApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AdminApi<'_> {
    pub async fn pending_users(&self, paging: Paging) -> ApiResult<ApiResponse<Vec<PendingUser>>> {
        self.client.get("/api/admin/pending-users", &paging.to_query()).await
    }

    pub async fn approve_user(&self, user_id: &str) -> ApiResult<ApiResponse<()>> {
        let body = ApproveUser { user_id };
        self.client.patch("/api/admin/approve-user", Some(&body)).await
    }

    pub async fn reject_user(
        &self,
        user_id: &str,
        reason: Option<&str>,
    ) -> ApiResult<ApiResponse<()>> {
        let body = RejectUser { user_id, rejection_reason: reason };
        self.client.patch("/api/admin/reject-user", Some(&body)).await
    }

    pub async fn users(&self, filter: &UserFilter) -> ApiResult<ApiResponse<Vec<PendingUser>>> {
        self.client.get("/api/admin/users", &filter.to_query()).await
    }

    /// Audit entries are backend-defined and schema-less on this side.
    pub async fn audit_logs(&self, paging: Paging) -> ApiResult<ApiResponse<Vec<Value>>> {
        self.client.get("/api/admin/audit-logs", &paging.to_query()).await
    }

    pub async fn stats(&self) -> ApiResult<ApiResponse<Value>> {
        self.client.get("/api/admin/stats", &[]).await
    }

    pub async fn hostels(&self) -> ApiResult<ApiResponse<Vec<HostelSummary>>> {
        self.client.get("/api/admin/hostels", &[]).await
    }
}
