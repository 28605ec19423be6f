//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::entity::submission::SubmissionForm;
use crate::domain::pipeline::{self, Transition};
use crate::domain::value_object::{
    certificate_type::{CertificateGroup, CertificateType},
    request_id::RequestId,
    request_status::RequestStatus,
};

// ============================================================================
// Submission
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequestBody {
    pub full_name: String,
    pub email: String,
    pub selected_types: Vec<CertificateType>,
    pub submission_sign: String,
    #[serde(default)]
    pub internal_phone: String,
    #[serde(default)]
    pub mobile_phone: String,
    #[serde(default)]
    pub target_country: Option<String>,
}

impl From<SubmitRequestBody> for SubmissionForm {
    fn from(body: SubmitRequestBody) -> Self {
        Self {
            full_name: body.full_name,
            email: body.email,
            selected_types: body.selected_types,
            submission_sign: body.submission_sign,
            internal_phone: body.internal_phone,
            mobile_phone: body.mobile_phone,
            target_country: body.target_country,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub id: RequestId,
}

// ============================================================================
// Tracking / staff
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptBody {
    pub signer_name: String,
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub status: RequestStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdateResponse {
    pub id: RequestId,
    pub status: RequestStatus,
    pub transition: Option<Transition>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotifyResponse {
    pub id: RequestId,
    pub outcome: String,
}

// ============================================================================
// Catalogue
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueType {
    pub label: String,
    pub group: CertificateGroup,
    pub requires_country: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueStatus {
    pub code: &'static str,
    pub label: String,
    pub progress: f64,
}

/// Everything the form and tracker need to render choices
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueResponse {
    pub types: Vec<CatalogueType>,
    pub statuses: Vec<CatalogueStatus>,
}

impl CatalogueResponse {
    pub fn build() -> Self {
        Self {
            types: CertificateType::ALL
                .iter()
                .map(|t| CatalogueType {
                    label: t.to_string(),
                    group: t.group(),
                    requires_country: t.is_visa(),
                })
                .collect(),
            statuses: RequestStatus::PIPELINE
                .iter()
                .map(|s| CatalogueStatus {
                    code: s.code(),
                    label: s.to_string(),
                    progress: pipeline::progress(*s),
                })
                .collect(),
        }
    }
}
