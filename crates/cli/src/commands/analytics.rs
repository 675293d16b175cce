use anyhow::Result;
use clap::Subcommand;
use hostelvoice_client::ApiClient;
use hostelvoice_core::DEFAULT_ANALYTICS_PERIOD_DAYS;

use super::print_data;

#[derive(Subcommand)]
pub(crate) enum AnalyticsCommand {
    /// Headline dashboard numbers
    Dashboard,
    /// Issue counts by status, category and priority
    Summary {
        #[arg(long)]
        hostel: Option<String>,
    },
    /// Average hours to resolution
    ResolutionTime {
        #[arg(long)]
        category: Option<String>,
    },
    /// Issue frequency by category over a look-back window
    Categories {
        #[arg(long, default_value_t = DEFAULT_ANALYTICS_PERIOD_DAYS)]
        period: u32,
    },
    /// Issue density per hostel
    Density {
        #[arg(long, default_value_t = DEFAULT_ANALYTICS_PERIOD_DAYS)]
        period: u32,
    },
    /// Weekly created/resolved trend lines
    Trends {
        #[arg(long, default_value_t = DEFAULT_ANALYTICS_PERIOD_DAYS)]
        period: u32,
    },
}

pub(crate) async fn run(client: &ApiClient, cmd: AnalyticsCommand) -> Result<()> {
    match cmd {
        AnalyticsCommand::Dashboard => print_data(&client.analytics().dashboard().await?),
        AnalyticsCommand::Summary { hostel } => {
            print_data(&client.analytics().issues_summary(hostel.as_deref()).await?)
        },
        AnalyticsCommand::ResolutionTime { category } => {
            print_data(&client.analytics().resolution_time(category.as_deref()).await?)
        },
        AnalyticsCommand::Categories { period } => {
            print_data(&client.analytics().category_frequency(period).await?)
        },
        AnalyticsCommand::Density { period } => {
            print_data(&client.analytics().hostel_density(period).await?)
        },
        AnalyticsCommand::Trends { period } => {
            print_data(&client.analytics().status_trends(period).await?)
        },
    }
}
