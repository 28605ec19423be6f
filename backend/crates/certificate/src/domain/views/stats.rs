//! Pipeline statistics for the report screen.

use serde::Serialize;

use crate::domain::entity::certificate_request::CertificateRequest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStats {
    pub total: usize,
    /// Not yet returned
    pub pending: usize,
    pub returned: usize,
    /// Collected by the requester
    pub completed: usize,
}

impl PipelineStats {
    pub fn compute(requests: &[CertificateRequest]) -> Self {
        requests.iter().fold(Self::default(), |mut acc, r| {
            acc.total += 1;
            if r.status.is_returned() {
                acc.returned += 1;
            } else {
                acc.pending += 1;
            }
            if r.has_receipt() {
                acc.completed += 1;
            }
            acc
        })
    }
}
