//! Notification endpoints.

use hostelvoice_core::{ApiResponse, DEFAULT_PAGE, NOTIFICATIONS_PAGE_SIZE, Notification, UnreadCount};
use serde::Serialize;

use crate::{ApiClient, ApiResult};

/// Feed filter. Defaults match the backend's: first page, twenty entries,
/// read and unread alike.
#[derive(Debug, Clone, Copy)]
pub struct NotificationFilter {
    pub page: u32,
    pub limit: u32,
    /// `Some(true)` restricts to unread, `Some(false)` to read; `None` sends
    /// no filter at all.
    pub unread: Option<bool>,
}

impl Default for NotificationFilter {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, limit: NOTIFICATIONS_PAGE_SIZE, unread: None }
    }
}

impl NotificationFilter {
    fn to_query(self) -> Vec<(&'static str, String)> {
        let mut query =
            vec![("page", self.page.to_string()), ("limit", self.limit.to_string())];
        if let Some(unread) = self.unread {
            query.push(("unread", unread.to_string()));
        }
        query
    }
}

#[derive(Debug, Serialize)]
struct MarkRead<'a> {
    notification_ids: &'a [String],
}

pub struct NotificationsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl NotificationsApi<'_> {
    pub async fn list(
        &self,
        filter: NotificationFilter,
    ) -> ApiResult<ApiResponse<Vec<Notification>>> {
        self.client.get("/api/notifications", &filter.to_query()).await
    }

    pub async fn unread_count(&self) -> ApiResult<ApiResponse<UnreadCount>> {
        self.client.get("/api/notifications/count", &[]).await
    }

    pub async fn mark_read(&self, notification_ids: &[String]) -> ApiResult<ApiResponse<()>> {
        let body = MarkRead { notification_ids };
        self.client.patch("/api/notifications/read", Some(&body)).await
    }

    pub async fn mark_all_read(&self) -> ApiResult<ApiResponse<()>> {
        self.client.patch("/api/notifications/read-all", None::<&()>).await
    }
}
