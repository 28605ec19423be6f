//! Remote Store Contract
//!
//! The spreadsheet-backed API that holds every request. Each operation is a
//! single round trip with no retries; implementations live in `infra`.

use crate::domain::entity::{
    certificate_request::CertificateRequest, submission::NewCertificateRequest,
};
use crate::domain::value_object::{request_id::RequestId, request_status::RequestStatus};
use thiserror::Error;

/// Store-specific result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Remote operation, used to name failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreAction {
    List,
    Create,
    SetStatus,
    SetReceipt,
    Delete,
    Notify,
}

impl StoreAction {
    /// Action name understood by the spreadsheet web app
    pub const fn wire_name(&self) -> &'static str {
        match self {
            Self::List => "getRequests",
            Self::Create => "saveRequestServer",
            Self::SetStatus => "updateRequestStatusServer",
            Self::SetReceipt => "updateReceivingServer",
            Self::Delete => "deleteRequestServer",
            Self::Notify => "sendEmailNotification",
        }
    }

    /// Human description for error messages
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::List => "load requests",
            Self::Create => "save the request",
            Self::SetStatus => "update the status",
            Self::SetReceipt => "record the receipt",
            Self::Delete => "delete the request",
            Self::Notify => "send the notification email",
        }
    }
}

/// Remote store failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote store responded with HTTP {0}")]
    Status(u16),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Remote store rejected the call: {0}")]
    Rejected(String),

    #[error("Request #{0} does not exist")]
    UnknownRequest(RequestId),
}

impl StoreError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

/// Request store trait
#[trait_variant::make(RequestStore: Send)]
pub trait LocalRequestStore {
    /// All requests, in store order
    async fn list(&self) -> StoreResult<Vec<CertificateRequest>>;

    /// Persist a new request and return its assigned id
    async fn create(&self, request: &NewCertificateRequest) -> StoreResult<RequestId>;

    async fn set_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()>;

    /// Record pickup; the store stamps the date
    async fn set_receipt(&self, id: RequestId, signer: &str) -> StoreResult<()>;

    async fn delete(&self, id: RequestId) -> StoreResult<()>;

    /// Email the requester; returns the outcome text the store recorded
    async fn notify(&self, id: RequestId) -> StoreResult<String>;
}
