//! Request dispatch and response normalization.

use std::fmt;
use std::sync::Arc;

use hostelvoice_core::ApiResponse;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::error::RawEnvelope;
use crate::{
    AdminApi, AnalyticsApi, AnnouncementsApi, ApiConfig, ApiError, ApiResult, IssuesApi,
    LostFoundApi, NotificationsApi, ResidentsApi, SessionProvider, UploadApi,
};

type ExpiryHook = dyn Fn() + Send + Sync;

/// Entry point to the HostelVoice API.
///
/// Cheap to clone: clones share the connection pool, the session provider and
/// the expiry hook. The client issues each call as a single fire-and-forget
/// request, with no retries, no caching, and no ordering across concurrent
/// calls. Callers that race requests against each other are expected to
/// cancel stale ones via [`ApiClient::with_cancellation`].
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    session: Arc<dyn SessionProvider>,
    expiry_hook: Option<Arc<ExpiryHook>>,
    cancel: Option<CancellationToken>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url())
            .field("cancellable", &self.cancel.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client against `config`, reading tokens from `session`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built (TLS backend
    /// failure).
    pub fn new(config: ApiConfig, session: Arc<dyn SessionProvider>) -> ApiResult<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::ClientInit(e.to_string()))?;
        Ok(Self { http, config, session, expiry_hook: None, cancel: None })
    }

    /// Registers a callback fired once per 401 response, after the session
    /// has been cleared. This is where an application shell hangs its
    /// "return to login" behavior; the client itself never navigates.
    #[must_use]
    pub fn on_session_expired(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.expiry_hook = Some(Arc::new(hook));
        self
    }

    /// A clone of this client bound to `token`. Every request made through
    /// the returned client is abandoned with [`ApiError::Cancelled`] once the
    /// token fires; use this to drop a stale in-flight fetch when a newer one
    /// supersedes it.
    #[must_use]
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        let mut bound = self.clone();
        bound.cancel = Some(token);
        bound
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    #[must_use]
    pub fn issues(&self) -> IssuesApi<'_> {
        IssuesApi { client: self }
    }

    #[must_use]
    pub fn announcements(&self) -> AnnouncementsApi<'_> {
        AnnouncementsApi { client: self }
    }

    #[must_use]
    pub fn lost_found(&self) -> LostFoundApi<'_> {
        LostFoundApi { client: self }
    }

    #[must_use]
    pub fn residents(&self) -> ResidentsApi<'_> {
        ResidentsApi { client: self }
    }

    #[must_use]
    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi { client: self }
    }

    #[must_use]
    pub fn analytics(&self) -> AnalyticsApi<'_> {
        AnalyticsApi { client: self }
    }

    #[must_use]
    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { client: self }
    }

    #[must_use]
    pub fn upload(&self) -> UploadApi<'_> {
        UploadApi { client: self }
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<ApiResponse<T>> {
        let mut request = self.http.get(self.url(path));
        if !query.is_empty() {
            request = request.query(query);
        }
        self.dispatch(path, request).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<T>> {
        self.send_with_body(Method::POST, path, body).await
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<T>> {
        self.send_with_body(Method::PATCH, path, body).await
    }

    pub(crate) async fn delete<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<T>> {
        self.send_with_body(Method::DELETE, path, body).await
    }

    // A missing body sends no payload and no content type; `.json` sets both.
    async fn send_with_body<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<ApiResponse<T>> {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        self.dispatch(path, request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        mut request: reqwest::RequestBuilder,
    ) -> ApiResult<ApiResponse<T>> {
        if let Some(token) = self.session.access_token().await? {
            request = request.header("Authorization", format!("Bearer {token}"));
        }
        tracing::debug!(path, "dispatching request");

        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<(StatusCode, String), reqwest::Error>((status, body))
        };
        let (status, body) = match &self.cancel {
            Some(token) => tokio::select! {
                () = token.cancelled() => return Err(ApiError::Cancelled),
                outcome = exchange => outcome?,
            },
            None => exchange.await?,
        };

        self.normalize(path, status, &body).await
    }

    /// Every exchange funnels through here: callers only ever see a
    /// well-formed success envelope or an `ApiError`.
    async fn normalize<T: DeserializeOwned>(
        &self,
        path: &str,
        status: StatusCode,
        body: &str,
    ) -> ApiResult<ApiResponse<T>> {
        let raw: RawEnvelope = serde_json::from_str(body).map_err(|source| ApiError::Decode {
            context: format!("{path} (body: {})", truncate(body, 200)),
            source,
        })?;

        if status == StatusCode::UNAUTHORIZED {
            // Unconditional for every endpoint. Idempotent, so overlapping
            // 401s from concurrent calls are harmless.
            self.session.clear().await;
            if let Some(hook) = &self.expiry_hook {
                hook();
            }
            tracing::warn!(path, "backend answered 401, session cleared");
            let message = raw
                .message
                .clone()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| "Session expired".to_owned());
            return Err(ApiError::Unauthorized { message, envelope: Box::new(raw) });
        }

        if !status.is_success() || !raw.success {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: raw.failure_message().to_owned(),
                envelope: Box::new(raw),
            });
        }

        retype(path, raw)
    }
}

// Success envelopes are parsed untyped first so failure bodies with arbitrary
// `data` still produce a usable error; only here does `data` take its record
// shape.
fn retype<T: DeserializeOwned>(path: &str, raw: RawEnvelope) -> ApiResult<ApiResponse<T>> {
    let ApiResponse { success, message, data, meta, error } = raw;
    let data = match data {
        None | Some(serde_json::Value::Null) => None,
        Some(value) => {
            Some(serde_json::from_value(value).map_err(|source| ApiError::Decode {
                context: format!("{path} data payload"),
                source,
            })?)
        },
    };
    Ok(ApiResponse { success, message, data, meta, error })
}

/// Truncates a string to the given maximum length at a char boundary.
fn truncate(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        s
    } else {
        let mut end = max_len;
        while end > 0 && !s.is_char_boundary(end) {
            end = end.saturating_sub(1);
        }
        s.get(..end).unwrap_or("")
    }
}
