use anyhow::Result;
use clap::Subcommand;
use hostelvoice_client::ApiClient;

use super::{paging, print_data};

#[derive(Subcommand)]
pub(crate) enum ResidentsCommand {
    /// The signed-in user's own profile
    Me,
    List {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    /// Residents of one hostel
    Hostel {
        name: String,
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
}

pub(crate) async fn run(client: &ApiClient, cmd: ResidentsCommand) -> Result<()> {
    match cmd {
        ResidentsCommand::Me => print_data(&client.residents().me().await?),
        ResidentsCommand::List { page, limit } => {
            print_data(&client.residents().list(paging(page, limit)).await?)
        },
        ResidentsCommand::Hostel { name, page, limit } => {
            print_data(&client.residents().by_hostel(&name, paging(page, limit)).await?)
        },
        ResidentsCommand::Get { id } => print_data(&client.residents().get(&id).await?),
    }
}
