use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use hostelvoice_client::{ApiClient, CloseItem, CloseOutcome, LostFoundFilter, NewLostFoundItem};
use hostelvoice_core::LostFoundKind;

use super::{paging, print_data};

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum KindArg {
    Lost,
    Found,
}

impl From<KindArg> for LostFoundKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Lost => Self::Lost,
            KindArg::Found => Self::Found,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum OutcomeArg {
    Returned,
    Closed,
}

impl From<OutcomeArg> for CloseOutcome {
    fn from(outcome: OutcomeArg) -> Self {
        match outcome {
            OutcomeArg::Returned => Self::Returned,
            OutcomeArg::Closed => Self::Closed,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum LostFoundCommand {
    /// Open items on the public board
    List {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short = 't', long = "type")]
        kind: Option<KindArg>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Items reported by the signed-in user
    Mine {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Every item in every state (staff view)
    All {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
    /// Report a lost or found item
    Report {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(short = 't', long = "type")]
        kind: KindArg,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        contact: Option<String>,
    },
    /// Claim a found item
    Claim {
        id: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Close an item as returned or closed
    Close {
        id: String,
        #[arg(long)]
        outcome: OutcomeArg,
        #[arg(long)]
        notes: Option<String>,
    },
}

pub(crate) async fn run(client: &ApiClient, cmd: LostFoundCommand) -> Result<()> {
    match cmd {
        LostFoundCommand::List { page, limit, kind, category, search } => {
            let filter = LostFoundFilter {
                page,
                limit,
                kind: kind.map(Into::into),
                category,
                search,
            };
            print_data(&client.lost_found().open_items(&filter).await?)
        },
        LostFoundCommand::Mine { page, limit } => {
            print_data(&client.lost_found().mine(paging(page, limit)).await?)
        },
        LostFoundCommand::All { page, limit } => {
            print_data(&client.lost_found().all(paging(page, limit)).await?)
        },
        LostFoundCommand::Get { id } => print_data(&client.lost_found().get(&id).await?),
        LostFoundCommand::Report { name, description, kind, category, location, contact } => {
            let kind: LostFoundKind = kind.into();
            let (location_found, location_lost) = match kind {
                LostFoundKind::Found => (location, None),
                LostFoundKind::Lost => (None, location),
            };
            let item = NewLostFoundItem {
                item_name: name,
                description,
                kind,
                category,
                location_found,
                location_lost,
                date_found: None,
                date_lost: None,
                contact_info: contact,
                images: Vec::new(),
            };
            print_data(&client.lost_found().report(&item).await?)
        },
        LostFoundCommand::Claim { id, notes } => {
            print_data(&client.lost_found().claim(&id, notes.as_deref()).await?)
        },
        LostFoundCommand::Close { id, outcome, notes } => {
            let req = CloseItem { status: outcome.into(), notes };
            print_data(&client.lost_found().close(&id, &req).await?)
        },
    }
}
