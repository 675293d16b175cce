use anyhow::Result;
use clap::Subcommand;
use hostelvoice_client::{ApiClient, AssignIssue, IssueFilter, MergeIssues, NewIssue, UpdateIssueStatus};

use super::{paging, print_data};

#[derive(Subcommand)]
pub(crate) enum IssuesCommand {
    /// All issues, with optional filters (staff view)
    List {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
        #[arg(short, long)]
        status: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Issues reported by the signed-in user
    Mine {
        #[arg(short, long)]
        page: Option<u32>,
        #[arg(short, long)]
        limit: Option<u32>,
    },
    Get {
        id: String,
    },
    /// Report a new issue
    Report {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        hostel: String,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        room: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },
    /// Assign an issue to a caretaker
    Assign {
        id: String,
        #[arg(long)]
        to: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Move an issue to a new status
    Status {
        id: String,
        #[arg(long)]
        status: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Candidate duplicates of an issue
    Duplicates {
        id: String,
    },
    /// Merge duplicate issues into a master
    Merge {
        #[arg(long)]
        master: String,
        #[arg(long = "duplicate", required = true)]
        duplicates: Vec<String>,
        #[arg(long)]
        notes: Option<String>,
    },
}

pub(crate) async fn run(client: &ApiClient, cmd: IssuesCommand) -> Result<()> {
    match cmd {
        IssuesCommand::List { page, limit, status, category, search } => {
            let filter = IssueFilter { page, limit, status, category, search };
            print_data(&client.issues().list(&filter).await?)
        },
        IssuesCommand::Mine { page, limit } => {
            print_data(&client.issues().mine(paging(page, limit)).await?)
        },
        IssuesCommand::Get { id } => print_data(&client.issues().get(&id).await?),
        IssuesCommand::Report { title, description, category, hostel, priority, room, location } => {
            let issue = NewIssue {
                title,
                description,
                category,
                priority,
                hostel_name: hostel,
                room_number: room,
                location,
                images: Vec::new(),
            };
            print_data(&client.issues().create(&issue).await?)
        },
        IssuesCommand::Assign { id, to, notes } => {
            let req = AssignIssue { assigned_to: to, notes };
            print_data(&client.issues().assign(&id, &req).await?)
        },
        IssuesCommand::Status { id, status, notes } => {
            let req = UpdateIssueStatus { status, notes };
            print_data(&client.issues().update_status(&id, &req).await?)
        },
        IssuesCommand::Duplicates { id } => print_data(&client.issues().duplicates(&id).await?),
        IssuesCommand::Merge { master, duplicates, notes } => {
            let req = MergeIssues {
                master_issue_id: master,
                duplicate_issue_ids: duplicates,
                merge_notes: notes,
            };
            print_data(&client.issues().merge(&req).await?)
        },
    }
}
