//! Analytics endpoints. Read-only aggregates; all heavy lifting happens on
//! the backend.

use hostelvoice_core::{
    ApiResponse, CategoryFrequency, DashboardStats, HostelDensity, IssuesSummary, ResolutionTime,
    StatusTrend,
};

use crate::{ApiClient, ApiResult};

pub struct AnalyticsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AnalyticsApi<'_> {
    pub async fn dashboard(&self) -> ApiResult<ApiResponse<DashboardStats>> {
        self.client.get("/api/analytics/dashboard", &[]).await
    }

    pub async fn issues_summary(
        &self,
        hostel_name: Option<&str>,
    ) -> ApiResult<ApiResponse<IssuesSummary>> {
        let query = match hostel_name {
            Some(name) => vec![("hostel_name", name.to_owned())],
            None => Vec::new(),
        };
        self.client.get("/api/analytics/issues-summary", &query).await
    }

    pub async fn resolution_time(
        &self,
        category: Option<&str>,
    ) -> ApiResult<ApiResponse<ResolutionTime>> {
        let query = match category {
            Some(category) => vec![("category", category.to_owned())],
            None => Vec::new(),
        };
        self.client.get("/api/analytics/resolution-time", &query).await
    }

    pub async fn category_frequency(
        &self,
        period_days: u32,
    ) -> ApiResult<ApiResponse<Vec<CategoryFrequency>>> {
        self.client
            .get("/api/analytics/category-frequency", &[("period", period_days.to_string())])
            .await
    }

    pub async fn hostel_density(
        &self,
        period_days: u32,
    ) -> ApiResult<ApiResponse<Vec<HostelDensity>>> {
        self.client
            .get("/api/analytics/hostel-density", &[("period", period_days.to_string())])
            .await
    }

    pub async fn status_trends(
        &self,
        period_days: u32,
    ) -> ApiResult<ApiResponse<Vec<StatusTrend>>> {
        self.client
            .get("/api/analytics/status-trends", &[("period", period_days.to_string())])
            .await
    }
}
