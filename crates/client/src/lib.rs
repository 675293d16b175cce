//! Async client for the HostelVoice REST API.
//!
//! Every backend endpoint answers with the same JSON envelope
//! (`{ success, message, data?, meta?, error? }`); this crate normalizes each
//! response into either a typed success envelope or an [`ApiError`]. A 401
//! from any endpoint clears the injected session and fires the expiry hook,
//! so callers never see a half-failed state.
//!
//! ```no_run
//! use std::sync::Arc;
//! use hostelvoice_client::{ApiClient, ApiConfig, StaticSession};
//!
//! # async fn run() -> Result<(), hostelvoice_client::ApiError> {
//! let session = Arc::new(StaticSession::new("token-from-login"));
//! let client = ApiClient::new(ApiConfig::from_env(), session)?;
//! let issue = client.issues().get("abc123").await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod paging;
mod session;

mod admin;
mod analytics;
mod announcements;
mod issues;
mod lost_found;
mod notifications;
mod residents;
mod upload;

pub use admin::{AdminApi, UserFilter};
pub use analytics::AnalyticsApi;
pub use announcements::{AnnouncementsApi, NewAnnouncement, UpdateAnnouncement};
pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult, RawEnvelope};
pub use issues::{AssignIssue, IssueFilter, IssuesApi, MergeIssues, NewIssue, UpdateIssueStatus};
pub use lost_found::{CloseItem, CloseOutcome, LostFoundApi, LostFoundFilter, NewLostFoundItem};
pub use notifications::{NotificationFilter, NotificationsApi};
pub use paging::Paging;
pub use residents::{NewResidentProfile, ResidentProfileUpdate, ResidentsApi};
pub use session::{EnvSession, SessionProvider, SessionStoreError, StaticSession};
pub use upload::{NewUpload, UploadApi};

#[cfg(test)]
mod cancel_tests;
#[cfg(test)]
mod client_tests;
