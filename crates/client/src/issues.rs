//! Issue endpoints.

use hostelvoice_core::{ApiResponse, Issue};
use serde::Serialize;

use crate::{ApiClient, ApiResult, Paging};

/// Filters for the staff-facing issue listing. Only fields that are set
/// become query parameters.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl IssueFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(status) = &self.status {
            query.push(("status", status.clone()));
        }
        if let Some(category) = &self.category {
            query.push(("category", category.clone()));
        }
        if let Some(search) = &self.search {
            query.push(("search", search.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    pub hostel_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssignIssue {
    pub assigned_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateIssueStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Folds duplicate reports into a master issue; the backend owns the actual
/// merge semantics.
#[derive(Debug, Clone, Serialize)]
pub struct MergeIssues {
    pub master_issue_id: String,
    pub duplicate_issue_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge_notes: Option<String>,
}

pub struct IssuesApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl IssuesApi<'_> {
    /// Issues reported by the signed-in user.
    pub async fn mine(&self, paging: Paging) -> ApiResult<ApiResponse<Vec<Issue>>> {
        self.client.get("/api/issues/my", &paging.to_query()).await
    }

    pub async fn list(&self, filter: &IssueFilter) -> ApiResult<ApiResponse<Vec<Issue>>> {
        self.client.get("/api/issues", &filter.to_query()).await
    }

    pub async fn get(&self, id: &str) -> ApiResult<ApiResponse<Issue>> {
        self.client.get(&format!("/api/issues/{id}"), &[]).await
    }

    pub async fn create(&self, issue: &NewIssue) -> ApiResult<ApiResponse<Issue>> {
        self.client.post("/api/issues", Some(issue)).await
    }

    pub async fn assign(&self, id: &str, req: &AssignIssue) -> ApiResult<ApiResponse<Issue>> {
        self.client.patch(&format!("/api/issues/{id}/assign"), Some(req)).await
    }

    pub async fn update_status(
        &self,
        id: &str,
        req: &UpdateIssueStatus,
    ) -> ApiResult<ApiResponse<Issue>> {
        self.client.patch(&format!("/api/issues/{id}/status"), Some(req)).await
    }

    /// Candidate duplicates of `id`, as scored by the backend.
    pub async fn duplicates(&self, id: &str) -> ApiResult<ApiResponse<Vec<Issue>>> {
        self.client.get(&format!("/api/issues/{id}/duplicates"), &[]).await
    }

    pub async fn merge(&self, req: &MergeIssues) -> ApiResult<ApiResponse<Issue>> {
        self.client.post("/api/issues/merge", Some(req)).await
    }
}
