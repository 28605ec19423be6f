//! Application Layer
//!
//! Use cases, the request repository and read-side queries.

pub mod config;
pub mod confirm_receipt;
pub mod delete;
pub mod export;
pub mod notify;
pub mod poller;
pub mod queries;
pub mod repository;
pub mod submit;
pub mod update_status;

// Re-exports
pub use config::CertificateConfig;
pub use confirm_receipt::ConfirmReceiptUseCase;
pub use delete::{DeleteOutput, DeleteRequestUseCase};
pub use export::{CsvExport, export_csv};
pub use notify::NotifyUseCase;
pub use poller::{PollHandle, spawn_polling};
pub use queries::{PortalQueries, Report, TrackingHit};
pub use repository::{RefreshMode, RefreshOutcome, RequestRepository, SyncStatus};
pub use submit::{SubmitOutput, SubmitRequestUseCase};
pub use update_status::{UpdateStatusOutput, UpdateStatusUseCase};
