use anyhow::Result;
use clap::Subcommand;
use hostelvoice_client::{ApiClient, NewAnnouncement};

use super::{paging, print_ack, print_data};

#[derive(Subcommand)]
pub(crate) enum AnnouncementsCommand {
    /// Announcements targeted at the signed-in user
    List {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Every announcement regardless of targeting (staff view)
    All {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        target_role: Option<String>,
        #[arg(long)]
        target_hostel: Option<String>,
        #[arg(long)]
        expires_at: Option<String>,
    },
    Delete {
        id: String,
    },
    /// Flip an announcement's active flag
    Toggle {
        id: String,
    },
}

pub(crate) async fn run(client: &ApiClient, cmd: AnnouncementsCommand) -> Result<()> {
    match cmd {
        AnnouncementsCommand::List { page, limit, category } => {
            let envelope =
                client.announcements().targeted(paging(page, limit), category.as_deref()).await?;
            print_data(&envelope)
        },
        AnnouncementsCommand::All { page, limit } => {
            print_data(&client.announcements().all(paging(page, limit)).await?)
        },
        AnnouncementsCommand::Get { id } => print_data(&client.announcements().get(&id).await?),
        AnnouncementsCommand::Create {
            title,
            content,
            category,
            priority,
            target_role,
            target_hostel,
            expires_at,
        } => {
            let req = NewAnnouncement {
                title,
                content,
                category,
                priority,
                target_role,
                target_hostel,
                expires_at,
                attachments: Vec::new(),
            };
            print_data(&client.announcements().create(&req).await?)
        },
        AnnouncementsCommand::Delete { id } => {
            let envelope = client.announcements().delete(&id).await?;
            print_ack(&envelope);
            Ok(())
        },
        AnnouncementsCommand::Toggle { id } => {
            print_data(&client.announcements().toggle(&id).await?)
        },
    }
}
