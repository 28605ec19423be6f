//! Public status board
//!
//! Shown on a lobby screen, so names are masked.

use serde::Serialize;

use crate::domain::entity::certificate_request::CertificateRequest;
use crate::domain::value_object::{
    certificate_type::CertificateType, request_id::RequestId, request_status::RequestStatus, text,
};

const MASK: char = '•';
const MAX_MASK: usize = 4;

/// Keep 2 characters of the first name and 1 of the surname, each followed by
/// up to four bullets. A one-character surname and further tokens are dropped.
pub fn mask_name(name: &str) -> String {
    let name = text::normalize(name);
    let mut tokens = name.split_whitespace();
    let first = tokens.next().unwrap_or_default();
    let last = tokens.next().unwrap_or_default();

    let masked_first = mask_token(first, 2).unwrap_or_else(|| first.to_string());
    match mask_token(last, 1) {
        Some(masked_last) => format!("{masked_first} {masked_last}"),
        None => masked_first,
    }
}

fn mask_token(token: &str, keep: usize) -> Option<String> {
    let len = token.chars().count();
    if len <= keep {
        return None;
    }
    let mut out: String = token.chars().take(keep).collect();
    out.extend(std::iter::repeat_n(MASK, (len - keep).min(MAX_MASK)));
    Some(out)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardEntry {
    pub id: RequestId,
    pub masked_name: String,
    pub first_type: Option<CertificateType>,
    pub status: RequestStatus,
}

impl From<&CertificateRequest> for BoardEntry {
    fn from(r: &CertificateRequest) -> Self {
        Self {
            id: r.id,
            masked_name: mask_name(&r.full_name),
            first_type: r.selected_types.first().copied(),
            status: r.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicBoard {
    pub ready: Vec<BoardEntry>,
    pub processing: Vec<BoardEntry>,
    /// Uncapped number of processing requests
    pub processing_total: usize,
}

impl PublicBoard {
    /// Columns keep repository order, capped at the given limits
    pub fn build(requests: &[CertificateRequest], ready_limit: usize, processing_limit: usize) -> Self {
        let ready = requests
            .iter()
            .filter(|r| r.is_ready_for_pickup())
            .take(ready_limit)
            .map(BoardEntry::from)
            .collect();
        let processing_total = requests.iter().filter(|r| r.is_processing()).count();
        let processing = requests
            .iter()
            .filter(|r| r.is_processing())
            .take(processing_limit)
            .map(BoardEntry::from)
            .collect();

        Self {
            ready,
            processing,
            processing_total,
        }
    }
}
