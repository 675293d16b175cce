use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hostelvoice_client::{ApiClient, ApiConfig, EnvSession};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hostelvoice")]
#[command(about = "Operator console for the HostelVoice API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Maintenance issues
    #[command(subcommand)]
    Issues(commands::issues::IssuesCommand),
    /// Announcements
    #[command(subcommand)]
    Announcements(commands::announcements::AnnouncementsCommand),
    /// Lost-and-found board
    #[command(subcommand)]
    Lostfound(commands::lost_found::LostFoundCommand),
    /// Resident profiles
    #[command(subcommand)]
    Residents(commands::residents::ResidentsCommand),
    /// Notification feed
    #[command(subcommand)]
    Notifications(commands::notifications::NotificationsCommand),
    /// Backend analytics
    #[command(subcommand)]
    Analytics(commands::analytics::AnalyticsCommand),
    /// Admin operations (approval queue, users, audit trail)
    #[command(subcommand)]
    Admin(commands::admin::AdminCommand),
    /// File-storage tickets
    #[command(subcommand)]
    Upload(commands::upload::UploadCommand),
}

fn build_client() -> Result<ApiClient> {
    let session = Arc::new(EnvSession::default());
    let client = ApiClient::new(ApiConfig::from_env(), session)?.on_session_expired(|| {
        eprintln!("Session expired. Sign in again and refresh HOSTELVOICE_TOKEN.");
    });
    tracing::debug!(base_url = client.base_url(), "client configured");
    Ok(client)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let client = build_client()?;

    match cli.command {
        Commands::Issues(cmd) => commands::issues::run(&client, cmd).await,
        Commands::Announcements(cmd) => commands::announcements::run(&client, cmd).await,
        Commands::Lostfound(cmd) => commands::lost_found::run(&client, cmd).await,
        Commands::Residents(cmd) => commands::residents::run(&client, cmd).await,
        Commands::Notifications(cmd) => commands::notifications::run(&client, cmd).await,
        Commands::Analytics(cmd) => commands::analytics::run(&client, cmd).await,
        Commands::Admin(cmd) => commands::admin::run(&client, cmd).await,
        Commands::Upload(cmd) => commands::upload::run(&client, cmd).await,
    }
}
