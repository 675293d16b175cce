//! Core types for HostelVoice
//!
//! Domain records mirrored from the backend's resource shapes, the uniform
//! response envelope, and constants shared across the client and CLI crates.
//! Records are immutable snapshots: the server owns identifiers and
//! timestamps, consumers refresh by re-fetching.

mod admin;
mod analytics;
mod announcement;
mod constants;
mod envelope;
mod issue;
mod lost_found;
mod notification;
mod resident;
mod upload;

pub mod env;

pub use admin::*;
pub use analytics::*;
pub use announcement::*;
pub use constants::*;
pub use envelope::*;
pub use issue::*;
pub use lost_found::*;
pub use notification::*;
pub use resident::*;
pub use upload::*;
