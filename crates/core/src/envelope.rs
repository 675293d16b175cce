//! The uniform JSON wrapper returned by every backend endpoint.

use serde::{Deserialize, Serialize};

/// Response envelope: `{ success, message, data?, meta?, error? }`.
///
/// `success == true` iff `data` carries a meaningful payload; otherwise
/// `message` (or `error`) describes the failure. Parsing into this type is
/// the runtime boundary validation: a body that does not match the envelope
/// shape is rejected before any caller sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<PageMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

impl<T> ApiResponse<T> {
    /// Failure description with the precedence the backend promises:
    /// `message`, then `error`, then a generic default.
    #[must_use]
    pub fn failure_message(&self) -> &str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .or(self.error.as_deref())
            .unwrap_or("An error occurred")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_parses() {
        let env: ApiResponse<Vec<String>> = serde_json::from_value(json!({
            "success": true,
            "message": "ok",
            "data": ["a", "b"],
            "meta": {"page": 1, "limit": 10, "total": 2, "totalPages": 1}
        }))
        .expect("valid envelope");
        assert!(env.success);
        assert_eq!(env.data.as_deref(), Some(&["a".to_owned(), "b".to_owned()][..]));
        assert_eq!(env.meta.map(|m| m.total_pages), Some(1));
    }

    #[test]
    fn test_failure_message_precedence() {
        let with_message: ApiResponse<()> = serde_json::from_value(json!({
            "success": false, "message": "Room not found", "error": "not_found"
        }))
        .expect("valid envelope");
        assert_eq!(with_message.failure_message(), "Room not found");

        let error_only: ApiResponse<()> =
            serde_json::from_value(json!({"success": false, "error": "not_found"}))
                .expect("valid envelope");
        assert_eq!(error_only.failure_message(), "not_found");

        let bare: ApiResponse<()> =
            serde_json::from_value(json!({"success": false})).expect("valid envelope");
        assert_eq!(bare.failure_message(), "An error occurred");
    }

    #[test]
    fn test_empty_message_falls_through() {
        let env: ApiResponse<()> =
            serde_json::from_value(json!({"success": false, "message": "", "error": "boom"}))
                .expect("valid envelope");
        assert_eq!(env.failure_message(), "boom");
    }
}
