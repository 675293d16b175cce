//! Resident profile endpoints.

use chrono::NaiveDate;
use hostelvoice_core::{ApiResponse, Resident};
use serde::Serialize;

use crate::{ApiClient, ApiResult, Paging};

/// Initial profile submission (`POST /api/residents`), which the backend
/// treats as an upsert.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewResidentProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
}

/// Partial self-service update; check-in/out dates are staff-controlled and
/// absent here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ResidentProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guardian_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permanent_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_conditions: Option<String>,
}

pub struct ResidentsApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl ResidentsApi<'_> {
    /// The signed-in user's own profile.
    pub async fn me(&self) -> ApiResult<ApiResponse<Resident>> {
        self.client.get("/api/residents/me", &[]).await
    }

    pub async fn upsert(&self, profile: &NewResidentProfile) -> ApiResult<ApiResponse<Resident>> {
        self.client.post("/api/residents", Some(profile)).await
    }

    pub async fn update_me(
        &self,
        update: &ResidentProfileUpdate,
    ) -> ApiResult<ApiResponse<Resident>> {
        self.client.patch("/api/residents/me", Some(update)).await
    }

    pub async fn list(&self, paging: Paging) -> ApiResult<ApiResponse<Vec<Resident>>> {
        self.client.get("/api/residents", &paging.to_query()).await
    }

    pub async fn by_hostel(
        &self,
        hostel_name: &str,
        paging: Paging,
    ) -> ApiResult<ApiResponse<Vec<Resident>>> {
        let path = format!("/api/residents/hostel/{}", urlencoding::encode(hostel_name));
        self.client.get(&path, &paging.to_query()).await
    }

    pub async fn get(&self, id: &str) -> ApiResult<ApiResponse<Resident>> {
        self.client.get(&format!("/api/residents/{id}"), &[]).await
    }
}
