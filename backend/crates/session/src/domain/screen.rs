//! Screens and overlays

use certificate::domain::RequestId;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Top-level screen of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    #[default]
    #[display("home")]
    Home,
    #[display("form")]
    Form,
    #[display("adminList")]
    AdminList,
    #[display("tracking")]
    Tracking,
    #[display("report")]
    Report,
}

impl Screen {
    /// Screens only an elevated session may open
    pub fn requires_elevation(&self) -> bool {
        matches!(self, Self::AdminList | Self::Report)
    }

    /// Entering these screens triggers a silent refresh
    pub fn refreshes_on_entry(&self) -> bool {
        !matches!(self, Self::Form)
    }

    /// Screens kept fresh by periodic polling while elevated
    pub fn is_live(&self) -> bool {
        self.requires_elevation()
    }
}

/// What a staff member asked to delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DeleteTarget {
    /// A single request
    Request(RequestId),
    /// Every request filed under this email
    Requester(String),
}

/// Modal layered over the current screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Overlay {
    StaffLogin,
    DeleteConfirmation { target: DeleteTarget },
}
