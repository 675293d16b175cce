//! File-storage ticket payloads. The buckets themselves live behind the
//! backend; the client only ever sees pre-signed URLs.

use serde::{Deserialize, Serialize};

/// Payload of `POST /api/upload/signed-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedUpload {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
    pub path: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
    pub bucket: String,
}

/// Payload of `GET /api/upload/public-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicUrl {
    #[serde(rename = "publicUrl")]
    pub public_url: String,
}

/// Payload of `GET /api/upload/signed-url`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedDownload {
    #[serde(rename = "signedUrl")]
    pub signed_url: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
}
