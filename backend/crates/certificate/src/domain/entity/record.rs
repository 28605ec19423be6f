//! Wire shape of a spreadsheet row.
//!
//! Rows come back from a spreadsheet, so cells are loosely typed: phone
//! numbers arrive as numbers, ids as strings, blank cells as `""` or `null`,
//! and the type list may be a comma-joined string.

use serde::{Deserialize, Deserializer, Serialize, de};

use super::certificate_request::{CertificateRequest, Receipt};
use crate::domain::value_object::{
    certificate_type::CertificateType, email::Email, request_id::RequestId,
    request_status::RequestStatus,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RequestRecord {
    #[serde(deserialize_with = "lenient_id")]
    id: RequestId,
    #[serde(default, deserialize_with = "lenient_text")]
    full_name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    email: String,
    #[serde(default, deserialize_with = "lenient_types")]
    selected_types: Vec<CertificateType>,
    #[serde(default, deserialize_with = "lenient_text")]
    submission_sign: String,
    #[serde(default, deserialize_with = "lenient_text")]
    submission_date: String,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    receiving_sign: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    receiving_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    internal_phone: String,
    #[serde(default, deserialize_with = "lenient_text")]
    mobile_phone: String,
    #[serde(default)]
    status: RequestStatus,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    target_country: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    last_email_status: Option<String>,
}

impl From<RequestRecord> for CertificateRequest {
    fn from(r: RequestRecord) -> Self {
        let receipt = match (r.receiving_sign, r.receiving_date) {
            (Some(signer), Some(date)) => Some(Receipt { signer, date }),
            (None, None) => None,
            _ => {
                tracing::debug!(id = %r.id, "Dropping half-present receipt");
                None
            }
        };
        let includes_visa = r.selected_types.iter().any(CertificateType::is_visa);

        Self {
            id: r.id,
            full_name: r.full_name,
            email: Email::from_store(r.email),
            selected_types: r.selected_types,
            submission_sign: r.submission_sign,
            submission_date: r.submission_date,
            internal_phone: r.internal_phone,
            mobile_phone: r.mobile_phone,
            status: r.status,
            target_country: r.target_country.filter(|_| includes_visa),
            receipt,
            last_email_status: r.last_email_status,
        }
    }
}

impl From<CertificateRequest> for RequestRecord {
    fn from(c: CertificateRequest) -> Self {
        let (receiving_sign, receiving_date) = match c.receipt {
            Some(Receipt { signer, date }) => (Some(signer), Some(date)),
            None => (None, None),
        };
        Self {
            id: c.id,
            full_name: c.full_name,
            email: c.email.as_str().to_string(),
            selected_types: c.selected_types,
            submission_sign: c.submission_sign,
            submission_date: c.submission_date,
            receiving_sign,
            receiving_date,
            internal_phone: c.internal_phone,
            mobile_phone: c.mobile_phone,
            status: c.status,
            target_country: c.target_country,
            last_email_status: c.last_email_status,
        }
    }
}

// ============================================================================
// Lenient cell decoding
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum Cell {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Cell {
    fn into_text(self) -> String {
        match self {
            Self::Text(s) => s,
            Self::Int(i) => i.to_string(),
            Self::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
            Self::Float(f) => f.to_string(),
            Self::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TypesCell {
    List(Vec<String>),
    Joined(String),
}

fn lenient_text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<Cell>::deserialize(d)?
        .map(Cell::into_text)
        .unwrap_or_default())
}

fn lenient_opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Cell>::deserialize(d)?
        .map(Cell::into_text)
        .filter(|s| !s.trim().is_empty()))
}

fn lenient_id<'de, D: Deserializer<'de>>(d: D) -> Result<RequestId, D::Error> {
    match Cell::deserialize(d)? {
        Cell::Int(i) => Ok(RequestId::new(i)),
        Cell::Float(f) if f.fract() == 0.0 => Ok(RequestId::new(f as i64)),
        Cell::Text(s) => s
            .parse()
            .map_err(|_| de::Error::custom(format!("invalid request id {s:?}"))),
        _ => Err(de::Error::custom("request id must be a number")),
    }
}

fn lenient_types<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<CertificateType>, D::Error> {
    let labels = match Option::<TypesCell>::deserialize(d)? {
        Some(TypesCell::List(list)) => list,
        Some(TypesCell::Joined(joined)) => joined.split(',').map(str::to_string).collect(),
        None => Vec::new(),
    };

    let mut types = Vec::with_capacity(labels.len());
    for label in labels.iter().filter(|l| !l.trim().is_empty()) {
        match CertificateType::from_label(label) {
            Some(t) if !types.contains(&t) => types.push(t),
            Some(_) => {}
            None => tracing::warn!(label = %label, "Skipping unknown certificate type"),
        }
    }
    Ok(types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> CertificateRequest {
        serde_json::from_value::<RequestRecord>(value).unwrap().into()
    }

    #[test]
    fn test_spreadsheet_cells_are_coerced() {
        let request = decode(json!({
            "id": "1002",
            "fullName": "สมชาย ใจดี",
            "email": "somchai@example.com",
            "selectedTypes": "รับรองเงินเดือน, ออมสิน,รับรองเงินเดือน",
            "submissionSign": "สมชาย",
            "submissionDate": "2024-03-01T09:00:00.000Z",
            "internalPhone": 1234,
            "mobilePhone": 812345678.0,
            "receivingSign": "",
            "receivingDate": null,
        }));

        assert_eq!(request.id, RequestId::new(1002));
        assert_eq!(
            request.selected_types,
            vec![CertificateType::SalaryCertificate, CertificateType::GovernmentSavingsBank]
        );
        assert_eq!(request.internal_phone, "1234");
        assert_eq!(request.mobile_phone, "812345678");
        assert_eq!(request.status, RequestStatus::AtHr);
        assert!(request.receipt.is_none());
    }

    #[test]
    fn test_half_present_receipt_is_dropped() {
        let request = decode(json!({
            "id": 7,
            "status": "ดำเนินการเรียบร้อยแล้ว",
            "receivingSign": "สมหญิง",
        }));
        assert_eq!(request.status, RequestStatus::Returned);
        assert!(request.receipt.is_none());
    }

    #[test]
    fn test_country_kept_only_for_visa_requests() {
        let visa = decode(json!({
            "id": 8,
            "selectedTypes": ["รับรองภาษาอังกฤษเพื่อขอวีซ่า"],
            "targetCountry": "Japan",
        }));
        assert_eq!(visa.target_country.as_deref(), Some("Japan"));

        let salary = decode(json!({
            "id": 9,
            "selectedTypes": ["รับรองเงินเดือน"],
            "targetCountry": "Japan",
        }));
        assert!(salary.target_country.is_none());
    }

    #[test]
    fn test_unknown_types_skipped_and_bad_id_rejected() {
        let request = decode(json!({ "id": 10, "selectedTypes": ["??", "ออมสิน"] }));
        assert_eq!(request.selected_types, vec![CertificateType::GovernmentSavingsBank]);

        assert!(serde_json::from_value::<RequestRecord>(json!({ "id": "abc" })).is_err());
        assert!(serde_json::from_value::<RequestRecord>(json!({ "id": true })).is_err());
    }
}
