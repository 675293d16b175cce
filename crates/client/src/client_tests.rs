#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{
        ApiClient, ApiConfig, ApiError, Paging, SessionProvider, SessionStoreError, StaticSession,
    };

    /// Session double that counts sign-outs.
    struct CountingSession {
        token: StaticSession,
        clears: AtomicUsize,
    }

    impl CountingSession {
        fn new(token: &str) -> Self {
            Self { token: StaticSession::new(token), clears: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl SessionProvider for CountingSession {
        async fn access_token(&self) -> Result<Option<String>, SessionStoreError> {
            self.token.access_token().await
        }

        async fn clear(&self) {
            self.clears.fetch_add(1, Ordering::SeqCst);
            self.token.clear().await;
        }
    }

    fn client_for(server: &MockServer) -> ApiClient {
        let session = Arc::new(StaticSession::new("test-token"));
        ApiClient::new(ApiConfig::new(server.uri()), session).expect("client builds")
    }

    fn issue_json(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": "Leak",
            "description": "Water leaking under the sink",
            "category": "plumbing",
            "priority": "high",
            "status": "pending",
            "hostel_name": "North Block",
            "reported_by": "u-1",
            "created_at": "2026-01-05T09:00:00Z",
            "updated_at": "2026-01-05T09:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_success_envelope_resolves_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/issues/abc123"))
            .and(header("Authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Issue fetched",
                "data": issue_json("abc123")
            })))
            .mount(&server)
            .await;

        let envelope = client_for(&server).issues().get("abc123").await.unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.message.as_deref(), Some("Issue fetched"));
        assert_eq!(envelope.data.unwrap().id, "abc123");
    }

    #[tokio::test]
    async fn test_success_false_rejects_even_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/issues"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "message": "Nothing to see"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .issues()
            .list(&crate::IssueFilter::default())
            .await
            .unwrap_err();
        match err {
            ApiError::Status { status, ref message, .. } => {
                assert_eq!(status, 200);
                assert_eq!(message, "Nothing to see");
            },
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_failure_message_falls_back_to_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/residents/me"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "error": "resident_not_found"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).residents().me().await.unwrap_err();
        assert_eq!(err.to_string(), "resident_not_found");
        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn test_failure_message_generic_default() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/admin/stats"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let err = client_for(&server).admin().stats().await.unwrap_err();
        assert_eq!(err.to_string(), "An error occurred");
    }

    #[tokio::test]
    async fn test_401_clears_session_and_fires_hook_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/notifications/count"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "Session expired"
            })))
            .mount(&server)
            .await;

        let session = Arc::new(CountingSession::new("stale-token"));
        let provider: Arc<dyn SessionProvider> = session.clone();
        let expiries = Arc::new(AtomicUsize::new(0));
        let hook_expiries = Arc::clone(&expiries);
        let client = ApiClient::new(ApiConfig::new(server.uri()), provider)
            .expect("client builds")
            .on_session_expired(move || {
                hook_expiries.fetch_add(1, Ordering::SeqCst);
            });

        let err = client.notifications().unread_count().await.unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Session expired");
        assert_eq!(err.status(), Some(401));
        assert_eq!(session.clears.load(Ordering::SeqCst), 1);
        assert_eq!(expiries.load(Ordering::SeqCst), 1);
        assert_eq!(session.access_token().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_401_default_message() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/issues/my"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"success": false})))
            .mount(&server)
            .await;

        let err = client_for(&server).issues().mine(Paging::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Session expired");
    }

    #[tokio::test]
    async fn test_error_envelope_kept_for_inspection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/issues/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "message": "Issue not found",
                "data": {"requested": "gone"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).issues().get("gone").await.unwrap_err();
        let envelope = err.envelope().expect("envelope attached");
        assert_eq!(envelope.data.as_ref().unwrap()["requested"], "gone");
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/analytics/dashboard"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = client_for(&server).analytics().dashboard().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_mismatched_data_shape_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/notifications/count"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "ok",
                "data": {"count": "eleven"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server).notifications().unread_count().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode { .. }), "got {err:?}");
    }

    #[tokio::test]
    async fn test_get_sends_no_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/announcements"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "ok", "data": []
            })))
            .mount(&server)
            .await;

        client_for(&server)
            .announcements()
            .targeted(Paging::default(), None)
            .await
            .unwrap();

        let requests = server.received_requests().await.expect("requests recorded");
        assert_eq!(requests.len(), 1);
        assert!(!requests[0].headers.contains_key("content-type"));
        assert!(requests[0].body.is_empty());
    }

    #[tokio::test]
    async fn test_bodyless_patch_sends_no_payload() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path("/api/notifications/read-all"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "ok"
            })))
            .mount(&server)
            .await;

        client_for(&server).notifications().mark_all_read().await.unwrap();

        let requests = server.received_requests().await.expect("requests recorded");
        assert!(requests[0].body.is_empty());
        assert!(!requests[0].headers.contains_key("content-type"));
    }

    #[tokio::test]
    async fn test_anonymous_session_sends_no_auth_header() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/lostfound"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true, "message": "ok", "data": []
            })))
            .mount(&server)
            .await;

        let session = Arc::new(StaticSession::anonymous());
        let client =
            ApiClient::new(ApiConfig::new(server.uri()), session).expect("client builds");
        client.lost_found().open_items(&crate::LostFoundFilter::default()).await.unwrap();

        let requests = server.received_requests().await.expect("requests recorded");
        assert!(!requests[0].headers.contains_key("authorization"));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        // Nothing listens here; the connection itself fails.
        let session = Arc::new(StaticSession::anonymous());
        let client = ApiClient::new(ApiConfig::new("http://127.0.0.1:9"), session)
            .expect("client builds");

        let err = client.analytics().dashboard().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
        assert!(err.envelope().is_none());
    }
}
