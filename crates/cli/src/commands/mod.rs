pub(crate) mod admin;
pub(crate) mod analytics;
pub(crate) mod announcements;
pub(crate) mod issues;
pub(crate) mod lost_found;
pub(crate) mod notifications;
pub(crate) mod residents;
pub(crate) mod upload;

use anyhow::Result;
use hostelvoice_client::Paging;
use hostelvoice_core::{ApiResponse, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, env};
use serde::Serialize;

/// Page size when `--limit` is omitted; deployments can pin one via
/// `HOSTELVOICE_PAGE_SIZE`.
pub(crate) fn default_limit() -> u32 {
    env::parse_or_default("HOSTELVOICE_PAGE_SIZE", DEFAULT_PAGE_SIZE)
}

pub(crate) fn paging(page: Option<u32>, limit: Option<u32>) -> Paging {
    Paging::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or_else(default_limit))
}

/// Print the payload of a successful envelope.
pub(crate) fn print_data<T: Serialize>(envelope: &ApiResponse<T>) -> Result<()> {
    match &envelope.data {
        Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
        None => println!("null"),
    }
    if let Some(meta) = &envelope.meta {
        eprintln!("page {}/{} ({} total)", meta.page, meta.total_pages, meta.total);
    }
    Ok(())
}

/// Print the acknowledgement of a data-less operation.
pub(crate) fn print_ack<T>(envelope: &ApiResponse<T>) {
    println!("{}", envelope.message.as_deref().unwrap_or("ok"));
}
