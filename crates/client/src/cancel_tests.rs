#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use serde_json::json;
    use tokio_util::sync::CancellationToken;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::{ApiClient, ApiConfig, IssueFilter, StaticSession};

    fn client_for(server: &MockServer) -> ApiClient {
        let session = Arc::new(StaticSession::new("test-token"));
        ApiClient::new(ApiConfig::new(server.uri()), session).expect("client builds")
    }

    #[tokio::test]
    async fn test_cancel_aborts_in_flight_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/issues"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "ok", "data": []}))
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&server)
            .await;

        let token = CancellationToken::new();
        let client = client_for(&server).with_cancellation(token.clone());

        let aborter = token.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            aborter.cancel();
        });

        let err = client.issues().list(&IssueFilter::default()).await.unwrap_err();
        assert!(err.is_cancelled(), "got {err:?}");
    }

    #[tokio::test]
    async fn test_unbound_clone_ignores_cancellation() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/issues"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "ok", "data": []})),
            )
            .mount(&server)
            .await;

        let token = CancellationToken::new();
        let base = client_for(&server);
        let _bound = base.with_cancellation(token.clone());
        token.cancel();

        // Only the bound clone observes the token.
        base.issues().list(&IssueFilter::default()).await.unwrap();
    }

    #[tokio::test]
    async fn test_already_cancelled_token_rejects_immediately() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/issues"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "ok", "data": []}))
                    .set_delay(Duration::from_secs(30)),
            )
            .mount(&server)
            .await;

        let token = CancellationToken::new();
        token.cancel();
        let client = client_for(&server).with_cancellation(token);

        let err = client.issues().list(&IssueFilter::default()).await.unwrap_err();
        assert!(err.is_cancelled(), "got {err:?}");
    }
}
