use anyhow::Result;
use clap::Subcommand;
use hostelvoice_client::{ApiClient, Paging, UserFilter};
use hostelvoice_core::{AUDIT_LOG_PAGE_SIZE, DEFAULT_PAGE};

use super::{paging, print_ack, print_data};

#[derive(Subcommand)]
pub(crate) enum AdminCommand {
    /// Accounts awaiting approval
    Pending {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    Approve {
        user_id: String,
    },
    Reject {
        user_id: String,
        #[arg(long)]
        reason: Option<String>,
    },
    /// All registered users, with optional filters
    Users {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Admin action trail
    AuditLogs {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// System-wide stats
    Stats,
    /// Hostels and their occupancy
    Hostels,
}

pub(crate) async fn run(client: &ApiClient, cmd: AdminCommand) -> Result<()> {
    match cmd {
        AdminCommand::Pending { page, limit } => {
            print_data(&client.admin().pending_users(paging(page, limit)).await?)
        },
        AdminCommand::Approve { user_id } => {
            let envelope = client.admin().approve_user(&user_id).await?;
            print_ack(&envelope);
            Ok(())
        },
        AdminCommand::Reject { user_id, reason } => {
            let envelope = client.admin().reject_user(&user_id, reason.as_deref()).await?;
            print_ack(&envelope);
            Ok(())
        },
        AdminCommand::Users { page, limit, role, status, search } => {
            let filter = UserFilter { page, limit, role, approval_status: status, search };
            print_data(&client.admin().users(&filter).await?)
        },
        AdminCommand::AuditLogs { page, limit } => {
            let page_req =
                Paging::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(AUDIT_LOG_PAGE_SIZE));
            print_data(&client.admin().audit_logs(page_req).await?)
        },
        AdminCommand::Stats => print_data(&client.admin().stats().await?),
        AdminCommand::Hostels => print_data(&client.admin().hostels().await?),
    }
}
