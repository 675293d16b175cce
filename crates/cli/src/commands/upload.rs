use anyhow::Result;
use clap::Subcommand;
use hostelvoice_client::{ApiClient, NewUpload};

use super::{print_ack, print_data};

#[derive(Subcommand)]
pub(crate) enum UploadCommand {
    /// Request a pre-signed upload URL
    Sign {
        #[arg(long)]
        bucket: String,
        #[arg(long)]
        filename: String,
        #[arg(long)]
        content_type: String,
    },
    /// Public URL of a stored file
    PublicUrl {
        #[arg(long)]
        bucket: String,
        #[arg(long)]
        path: String,
    },
    /// Pre-signed download URL for a private file
    SignDownload {
        #[arg(long)]
        bucket: String,
        #[arg(long)]
        path: String,
    },
    /// Delete a stored file
    Delete {
        #[arg(long)]
        bucket: String,
        #[arg(long)]
        path: String,
    },
    /// Files the signed-in user uploaded to a bucket
    MyFiles {
        bucket: String,
    },
}

pub(crate) async fn run(client: &ApiClient, cmd: UploadCommand) -> Result<()> {
    match cmd {
        UploadCommand::Sign { bucket, filename, content_type } => {
            let req = NewUpload { bucket, filename, content_type };
            print_data(&client.upload().sign_upload(&req).await?)
        },
        UploadCommand::PublicUrl { bucket, path } => {
            print_data(&client.upload().public_url(&bucket, &path).await?)
        },
        UploadCommand::SignDownload { bucket, path } => {
            print_data(&client.upload().sign_download(&bucket, &path).await?)
        },
        UploadCommand::Delete { bucket, path } => {
            let envelope = client.upload().delete_file(&bucket, &path).await?;
            print_ack(&envelope);
            Ok(())
        },
        UploadCommand::MyFiles { bucket } => {
            print_data(&client.upload().my_files(&bucket).await?)
        },
    }
}
