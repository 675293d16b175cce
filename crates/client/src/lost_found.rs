//! Lost-and-found endpoints.

use chrono::NaiveDate;
use hostelvoice_core::{ApiResponse, LostFoundItem, LostFoundKind};
use serde::Serialize;

use crate::{ApiClient, ApiResult, Paging};

/// Filters for the open-items board.
#[derive(Debug, Clone, Default)]
pub struct LostFoundFilter {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub kind: Option<LostFoundKind>,
    pub category: Option<String>,
    pub search: Option<String>,
}

impl LostFoundFilter {
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(kind) = self.kind {
            query.push(("type", kind.as_str().to_owned()));
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
pub struct NewLostFoundItem {
    pub item_name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: LostFoundKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_found: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_lost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_found: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_lost: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// Terminal states an item can be closed into.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CloseOutcome {
    Returned,
    Closed,
}

#[derive(Debug, Clone, Serialize)]
pub struct CloseItem {
    pub status: CloseOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
struct ClaimItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

pub struct LostFoundApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl LostFoundApi<'_> {
    /// The public board: open items only.
    pub async fn open_items(
        &self,
        filter: &LostFoundFilter,
    ) -> ApiResult<ApiResponse<Vec<LostFoundItem>>> {
        self.client.get("/api/lostfound", &filter.to_query()).await
    }

    /// Items reported by the signed-in user.
    pub async fn mine(&self, paging: Paging) -> ApiResult<ApiResponse<Vec<LostFoundItem>>> {
        self.client.get("/api/lostfound/my", &paging.to_query()).await
    }

    /// Every item in every state. Staff only.
    pub async fn all(&self, paging: Paging) -> ApiResult<ApiResponse<Vec<LostFoundItem>>> {
        self.client.get("/api/lostfound/all", &paging.to_query()).await
    }

    pub async fn get(&self, id: &str) -> ApiResult<ApiResponse<LostFoundItem>> {
        self.client.get(&format!("/api/lostfound/{id}"), &[]).await
    }

    pub async fn report(&self, item: &NewLostFoundItem) -> ApiResult<ApiResponse<LostFoundItem>> {
        self.client.post("/api/lostfound", Some(item)).await
    }

    pub async fn claim(
        &self,
        id: &str,
        notes: Option<&str>,
    ) -> ApiResult<ApiResponse<LostFoundItem>> {
        let body = ClaimItem { notes: notes.map(str::to_owned) };
        self.client.patch(&format!("/api/lostfound/{id}/claim"), Some(&body)).await
    }

    pub async fn close(&self, id: &str, req: &CloseItem) -> ApiResult<ApiResponse<LostFoundItem>> {
        self.client.patch(&format!("/api/lostfound/{id}/close"), Some(req)).await
    }
}
