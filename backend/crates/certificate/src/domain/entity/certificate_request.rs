//! Certificate Request Entity
//!
//! One row of the spreadsheet. The receipt is modelled as a single optional
//! value so that signer and date are either both present or both absent.

use serde::{Deserialize, Serialize};

use super::record::RequestRecord;
use crate::domain::value_object::{
    certificate_type::CertificateType, email::Email, request_id::RequestId,
    request_status::RequestStatus,
};

/// Pickup acknowledgement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub signer: String,
    pub date: String,
}

/// A certificate request as held by the remote store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RequestRecord", into = "RequestRecord")]
pub struct CertificateRequest {
    pub id: RequestId,
    pub full_name: String,
    pub email: Email,
    pub selected_types: Vec<CertificateType>,
    pub submission_sign: String,
    /// Assigned by the store, opaque
    pub submission_date: String,
    pub internal_phone: String,
    pub mobile_phone: String,
    pub status: RequestStatus,
    /// Only set when a visa letter was requested
    pub target_country: Option<String>,
    pub receipt: Option<Receipt>,
    /// Outcome text of the last notification email
    pub last_email_status: Option<String>,
}

impl CertificateRequest {
    #[inline]
    pub fn has_receipt(&self) -> bool {
        self.receipt.is_some()
    }

    pub fn includes_visa(&self) -> bool {
        self.selected_types.iter().any(CertificateType::is_visa)
    }

    /// Returned and still waiting for the requester
    pub fn is_ready_for_pickup(&self) -> bool {
        self.status.is_returned() && !self.has_receipt()
    }

    /// Not yet returned and not collected
    pub fn is_processing(&self) -> bool {
        !self.status.is_returned() && !self.has_receipt()
    }

    /// A receipt can be recorded (or corrected)
    pub fn accepts_receipt(&self) -> bool {
        self.status.accepts_receipt() || self.has_receipt()
    }

    /// Types joined the way the spreadsheet shows them
    pub fn types_label(&self) -> String {
        self.selected_types
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_encode_uses_camel_case_and_receipt_pair() {
        let req = with_receipt(
            request(9, "B", "b@c.co", RequestStatus::Returned),
            "B",
        );
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["fullName"], "B");
        assert_eq!(value["receivingSign"], "B");
        assert_eq!(value["receivingDate"], "2026-02-01T10:00:00Z");
        assert!(value.get("targetCountry").is_none());

        let back: CertificateRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, req);
    }

    #[test]
    fn test_pickup_and_processing_flags() {
        let done = request(1, "A", "a@b.co", RequestStatus::Returned);
        assert!(done.is_ready_for_pickup());
        assert!(!done.is_processing());

        let collected = with_receipt(done, "A");
        assert!(!collected.is_ready_for_pickup());
        assert!(!collected.is_processing());

        let back_from_admin = request(2, "A", "a@b.co", RequestStatus::ReturnedHrAdmin);
        assert!(back_from_admin.is_processing());
        assert!(back_from_admin.accepts_receipt());
    }
}
