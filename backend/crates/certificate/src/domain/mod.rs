//! Domain Layer
//!
//! Entities, value objects, the status pipeline, derived views and the
//! remote store contract.

pub mod entity;
pub mod pipeline;
pub mod store;
pub mod value_object;
pub mod views;

// Re-exports
pub use entity::{
    certificate_request::{CertificateRequest, Receipt},
    submission::{NewCertificateRequest, SubmissionForm, ValidationError},
    user_profile::UserProfile,
};
pub use store::{RequestStore, StoreAction, StoreError, StoreResult};
pub use value_object::{
    certificate_type::{CertificateGroup, CertificateType},
    email::Email,
    request_id::RequestId,
    request_status::RequestStatus,
};
