//! File-storage endpoints. The backend brokers pre-signed URLs; bytes never
//! pass through this client.

use hostelvoice_core::{ApiResponse, PublicUrl, SignedDownload, SignedUpload};
use serde::Serialize;
use serde_json::Value;

use crate::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize)]
pub struct NewUpload {
    pub bucket: String,
    pub filename: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
}

#[derive(Debug, Serialize)]
struct FileRef<'a> {
    bucket: &'a str,
    path: &'a str,
}

pub struct UploadApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl UploadApi<'_> {
    /// A one-shot URL the caller PUTs the file bytes to directly.
    pub async fn sign_upload(&self, req: &NewUpload) -> ApiResult<ApiResponse<SignedUpload>> {
        self.client.post("/api/upload/signed-url", Some(req)).await
    }

    pub async fn public_url(&self, bucket: &str, path: &str) -> ApiResult<ApiResponse<PublicUrl>> {
        let query = [("bucket", bucket.to_owned()), ("path", path.to_owned())];
        self.client.get("/api/upload/public-url", &query).await
    }

    pub async fn sign_download(
        &self,
        bucket: &str,
        path: &str,
    ) -> ApiResult<ApiResponse<SignedDownload>> {
        let query = [("bucket", bucket.to_owned()), ("path", path.to_owned())];
        self.client.get("/api/upload/signed-url", &query).await
    }

    // DELETE with a JSON body: the file reference rides in the payload, as
    // the backend expects.
    pub async fn delete_file(&self, bucket: &str, path: &str) -> ApiResult<ApiResponse<()>> {
        let body = FileRef { bucket, path };
        self.client.delete("/api/upload/file", Some(&body)).await
    }

    pub async fn my_files(&self, bucket: &str) -> ApiResult<ApiResponse<Vec<Value>>> {
        let path = format!("/api/upload/my-files/{}", urlencoding::encode(bucket));
        self.client.get(&path, &[]).await
    }
}
