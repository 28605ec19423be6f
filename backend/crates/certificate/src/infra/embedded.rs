//! Embedded Store
//!
//! In-process stand-in for the spreadsheet, used when no web app URL is
//! configured. Behaves like the hosted backend: sequential ids, server-side
//! timestamps and a recorded notification outcome. Contents are lost on
//! restart.

use chrono::{SecondsFormat, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entity::{
    certificate_request::{CertificateRequest, Receipt},
    submission::NewCertificateRequest,
};
use crate::domain::store::{RequestStore, StoreError, StoreResult};
use crate::domain::value_object::{
    email::Email, request_id::RequestId, request_status::RequestStatus,
};

const FIRST_ID: i64 = 1001;

/// Outcome recorded for a delivered notification
pub const NOTIFY_SENT: &str = "ส่งแล้ว";

#[derive(Debug)]
struct Sheet {
    rows: Vec<CertificateRequest>,
    next_id: i64,
}

impl Sheet {
    fn row_mut(&mut self, id: RequestId) -> StoreResult<&mut CertificateRequest> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::UnknownRequest(id))
    }
}

/// In-memory request store
#[derive(Debug, Clone)]
pub struct EmbeddedStore {
    sheet: Arc<Mutex<Sheet>>,
}

impl Default for EmbeddedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedStore {
    pub fn new() -> Self {
        Self::with_requests(Vec::new())
    }

    /// Start from existing rows; new ids continue after the highest one
    pub fn with_requests(rows: Vec<CertificateRequest>) -> Self {
        let next_id = rows
            .iter()
            .map(|r| r.id.value() + 1)
            .max()
            .unwrap_or(FIRST_ID)
            .max(FIRST_ID);
        Self {
            sheet: Arc::new(Mutex::new(Sheet { rows, next_id })),
        }
    }
}

fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl RequestStore for EmbeddedStore {
    async fn list(&self) -> StoreResult<Vec<CertificateRequest>> {
        Ok(self.sheet.lock().await.rows.clone())
    }

    async fn create(&self, request: &NewCertificateRequest) -> StoreResult<RequestId> {
        let mut sheet = self.sheet.lock().await;
        let id = RequestId::new(sheet.next_id);
        sheet.next_id += 1;

        sheet.rows.push(CertificateRequest {
            id,
            full_name: request.full_name.clone(),
            email: request.email.clone(),
            selected_types: request.selected_types.clone(),
            submission_sign: request.submission_sign.clone(),
            submission_date: timestamp(),
            internal_phone: request.internal_phone.clone(),
            mobile_phone: request.mobile_phone.clone(),
            status: RequestStatus::default(),
            target_country: request.target_country.clone(),
            receipt: None,
            last_email_status: None,
        });
        Ok(id)
    }

    async fn set_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()> {
        self.sheet.lock().await.row_mut(id)?.status = status;
        Ok(())
    }

    async fn set_receipt(&self, id: RequestId, signer: &str) -> StoreResult<()> {
        self.sheet.lock().await.row_mut(id)?.receipt = Some(Receipt {
            signer: signer.to_string(),
            date: timestamp(),
        });
        Ok(())
    }

    async fn delete(&self, id: RequestId) -> StoreResult<()> {
        let mut sheet = self.sheet.lock().await;
        let before = sheet.rows.len();
        sheet.rows.retain(|r| r.id != id);
        if sheet.rows.len() == before {
            return Err(StoreError::UnknownRequest(id));
        }
        Ok(())
    }

    async fn notify(&self, id: RequestId) -> StoreResult<String> {
        let mut sheet = self.sheet.lock().await;
        let row = sheet.row_mut(id)?;
        let outcome = if Email::is_valid_format(row.email.as_str()) {
            NOTIFY_SENT.to_string()
        } else {
            format!("ส่งไม่ได้: invalid address {}", row.email)
        };
        row.last_email_status = Some(outcome.clone());
        tracing::info!(id = %id, outcome = %outcome, "Embedded store recorded notification");
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::certificate_request::fixtures::request;
    use crate::domain::value_object::certificate_type::CertificateType;

    fn new_request() -> NewCertificateRequest {
        NewCertificateRequest {
            full_name: "Malee Dee".to_string(),
            email: Email::from_store("malee@x.co"),
            selected_types: vec![CertificateType::IslamicBank],
            submission_sign: "Malee".to_string(),
            internal_phone: "22".to_string(),
            mobile_phone: "08".to_string(),
            target_country: None,
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_1001_and_increase() {
        let store = EmbeddedStore::new();
        let a = store.create(&new_request()).await.unwrap();
        let b = store.create(&new_request()).await.unwrap();
        assert_eq!(a, RequestId::new(1001));
        assert_eq!(b, RequestId::new(1002));

        let rows = store.list().await.unwrap();
        assert_eq!(rows[0].status, RequestStatus::AtHr);
        assert!(!rows[0].submission_date.is_empty());
    }

    #[tokio::test]
    async fn test_seeded_ids_continue() {
        let store = EmbeddedStore::with_requests(vec![request(
            2000,
            "A",
            "a@x.co",
            RequestStatus::AtHr,
        )]);
        let id = store.create(&new_request()).await.unwrap();
        assert_eq!(id, RequestId::new(2001));
    }

    #[tokio::test]
    async fn test_receipt_sets_both_fields() {
        let store = EmbeddedStore::new();
        let id = store.create(&new_request()).await.unwrap();
        store.set_receipt(id, "Malee").await.unwrap();
        let receipt = store.list().await.unwrap()[0].receipt.clone().unwrap();
        assert_eq!(receipt.signer, "Malee");
        assert!(!receipt.date.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_ids() {
        let store = EmbeddedStore::new();
        let missing = RequestId::new(1);
        assert!(matches!(
            store.set_status(missing, RequestStatus::Returned).await,
            Err(StoreError::UnknownRequest(_))
        ));
        assert!(matches!(
            store.delete(missing).await,
            Err(StoreError::UnknownRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_notify_records_outcome() {
        let store = EmbeddedStore::new();
        let id = store.create(&new_request()).await.unwrap();
        assert_eq!(store.notify(id).await.unwrap(), NOTIFY_SENT);
        assert_eq!(
            store.list().await.unwrap()[0].last_email_status.as_deref(),
            Some(NOTIFY_SENT)
        );
    }
}
