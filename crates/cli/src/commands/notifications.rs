use anyhow::Result;
use clap::Subcommand;
use hostelvoice_client::{ApiClient, NotificationFilter};
use hostelvoice_core::{DEFAULT_PAGE, NOTIFICATIONS_PAGE_SIZE};

use super::{print_ack, print_data};

#[derive(Subcommand)]
pub(crate) enum NotificationsCommand {
    List {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
        /// Only unread notifications
        #[arg(short, long)]
        unread: bool,
    },
    /// Unread count
    Count,
    /// Mark specific notifications as read
    Read {
        ids: Vec<String>,
    },
    /// Mark everything as read
    ReadAll,
}

pub(crate) async fn run(client: &ApiClient, cmd: NotificationsCommand) -> Result<()> {
    match cmd {
        NotificationsCommand::List { page, limit, unread } => {
            let filter = NotificationFilter {
                page: page.unwrap_or(DEFAULT_PAGE),
                limit: limit.unwrap_or(NOTIFICATIONS_PAGE_SIZE),
                unread: unread.then_some(true),
            };
            print_data(&client.notifications().list(filter).await?)
        },
        NotificationsCommand::Count => print_data(&client.notifications().unread_count().await?),
        NotificationsCommand::Read { ids } => {
            let envelope = client.notifications().mark_read(&ids).await?;
            print_ack(&envelope);
            Ok(())
        },
        NotificationsCommand::ReadAll => {
            let envelope = client.notifications().mark_all_read().await?;
            print_ack(&envelope);
            Ok(())
        },
    }
}
