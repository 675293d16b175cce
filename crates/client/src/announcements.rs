//! Announcement endpoints.

use hostelvoice_core::{Announcement, ApiResponse};
use serde::Serialize;

use crate::{ApiClient, ApiResult, Paging};

#[derive(Debug, Clone, Serialize)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hostel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<String>,
}

/// Partial update; unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateAnnouncement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_hostel: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

pub struct AnnouncementsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AnnouncementsApi<'_> {
    /// Announcements targeted at the signed-in user's role and hostel.
    pub async fn targeted(
        &self,
        paging: Paging,
        category: Option<&str>,
    ) -> ApiResult<ApiResponse<Vec<Announcement>>> {
        let mut query = paging.to_query();
        if let Some(category) = category {
            query.push(("category", category.to_owned()));
        }
        self.client.get("/api/announcements", &query).await
    }

    /// Every announcement, regardless of targeting. Staff only.
    pub async fn all(&self, paging: Paging) -> ApiResult<ApiResponse<Vec<Announcement>>> {
        self.client.get("/api/announcements/all", &paging.to_query()).await
    }

    pub async fn get(&self, id: &str) -> ApiResult<ApiResponse<Announcement>> {
        self.client.get(&format!("/api/announcements/{id}"), &[]).await
    }

    pub async fn create(&self, req: &NewAnnouncement) -> ApiResult<ApiResponse<Announcement>> {
        self.client.post("/api/announcements", Some(req)).await
    }

    pub async fn update(
        &self,
        id: &str,
        req: &UpdateAnnouncement,
    ) -> ApiResult<ApiResponse<Announcement>> {
        self.client.patch(&format!("/api/announcements/{id}"), Some(req)).await
    }

    pub async fn delete(&self, id: &str) -> ApiResult<ApiResponse<()>> {
        self.client.delete(&format!("/api/announcements/{id}"), None::<&()>).await
    }

    /// Flips `is_active`.
    pub async fn toggle(&self, id: &str) -> ApiResult<ApiResponse<Announcement>> {
        self.client.patch(&format!("/api/announcements/{id}/toggle"), None::<&()>).await
    }
}
