//! Submission Entity
//!
//! Raw form input and the validated request sent to the store.

use serde::Serialize;
use thiserror::Error;

use crate::domain::value_object::{certificate_type::CertificateType, email::Email, text};

/// Why a submission was refused before reaching the store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    MissingFullName,

    #[error("Select at least one certificate")]
    NoCertificateSelected,

    #[error("Signature is required")]
    MissingSignature,

    #[error("Email is required")]
    MissingEmail,

    #[error("Email address is not valid")]
    InvalidEmail,

    #[error("Target country is required for a visa letter")]
    MissingTargetCountry,
}

/// Form fields as typed by the requester
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub full_name: String,
    pub email: String,
    pub selected_types: Vec<CertificateType>,
    pub submission_sign: String,
    pub internal_phone: String,
    pub mobile_phone: String,
    pub target_country: Option<String>,
}

impl SubmissionForm {
    /// Check required fields in form order
    pub fn validate(self) -> Result<NewCertificateRequest, ValidationError> {
        let full_name = text::non_blank(&self.full_name).ok_or(ValidationError::MissingFullName)?;

        let mut selected_types: Vec<CertificateType> = Vec::new();
        for t in self.selected_types {
            if !selected_types.contains(&t) {
                selected_types.push(t);
            }
        }
        if selected_types.is_empty() {
            return Err(ValidationError::NoCertificateSelected);
        }

        let submission_sign =
            text::non_blank(&self.submission_sign).ok_or(ValidationError::MissingSignature)?;

        if self.email.trim().is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        let email = Email::parse(&self.email).ok_or(ValidationError::InvalidEmail)?;

        let target_country = if selected_types.iter().any(CertificateType::is_visa) {
            let country = self
                .target_country
                .as_deref()
                .and_then(text::non_blank)
                .ok_or(ValidationError::MissingTargetCountry)?;
            Some(country)
        } else {
            None
        };

        Ok(NewCertificateRequest {
            full_name,
            email,
            selected_types,
            submission_sign,
            internal_phone: self.internal_phone.trim().to_string(),
            mobile_phone: self.mobile_phone.trim().to_string(),
            target_country,
        })
    }
}

/// A validated request, ready for `RequestStore::create`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCertificateRequest {
    pub full_name: String,
    pub email: Email,
    pub selected_types: Vec<CertificateType>,
    pub submission_sign: String,
    pub internal_phone: String,
    pub mobile_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_country: Option<String>,
}
