//! Requester directory
//!
//! Groups requests by requester email (case-insensitive). The most recent
//! request, by id, supplies name, contact numbers and notification state.

use serde::Serialize;
use std::collections::HashMap;

use crate::domain::entity::certificate_request::CertificateRequest;
use crate::domain::value_object::{certificate_type::CertificateType, request_id::RequestId};

/// Shown when no notification has been sent
pub const NEVER_SENT: &str = "ยังไม่เคยส่ง";

const SENT: &str = "ส่งแล้ว";
const FAILED_PREFIX: &str = "ส่งไม่ได้";

/// Coarse reading of the outcome text written by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NotificationState {
    Sent,
    Failed,
    Pending,
}

impl NotificationState {
    pub fn from_outcome(outcome: &str) -> Self {
        if outcome == SENT {
            Self::Sent
        } else if outcome.starts_with(FAILED_PREFIX) {
            Self::Failed
        } else {
            Self::Pending
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequesterSummary {
    pub full_name: String,
    pub email: String,
    pub internal_phone: String,
    pub mobile_phone: String,
    pub request_count: usize,
    pub requested_types: Vec<CertificateType>,
    pub latest_request_id: RequestId,
    pub last_request_date: String,
    pub last_email_status: String,
    pub notification: NotificationState,
}

impl RequesterSummary {
    fn from_request(r: &CertificateRequest) -> Self {
        let mut summary = Self {
            full_name: String::new(),
            email: String::new(),
            internal_phone: String::new(),
            mobile_phone: String::new(),
            request_count: 0,
            requested_types: Vec::new(),
            latest_request_id: r.id,
            last_request_date: String::new(),
            last_email_status: String::new(),
            notification: NotificationState::Pending,
        };
        summary.take_latest(r);
        summary
    }

    fn take_latest(&mut self, r: &CertificateRequest) {
        let outcome = r.last_email_status.as_deref().unwrap_or(NEVER_SENT);
        self.full_name = r.full_name.clone();
        self.email = r.email.as_str().trim().to_string();
        self.internal_phone = r.internal_phone.clone();
        self.mobile_phone = r.mobile_phone.clone();
        self.latest_request_id = r.id;
        self.last_request_date = r.submission_date.clone();
        self.last_email_status = outcome.to_string();
        self.notification = NotificationState::from_outcome(outcome);
    }

    fn absorb(&mut self, r: &CertificateRequest) {
        self.request_count += 1;
        for t in &r.selected_types {
            if !self.requested_types.contains(t) {
                self.requested_types.push(*t);
            }
        }
        if r.id > self.latest_request_id {
            self.take_latest(r);
        }
    }

    /// Case-insensitive match on name or email; empty query matches all
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.full_name.to_lowercase().contains(&q)
            || self.email.to_lowercase().contains(&q)
    }
}

/// One summary per distinct requester, in first-seen order
pub fn aggregate(requests: &[CertificateRequest]) -> Vec<RequesterSummary> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut summaries: Vec<RequesterSummary> = Vec::new();

    for r in requests {
        let slot = *index.entry(r.email.canonical()).or_insert_with(|| {
            summaries.push(RequesterSummary::from_request(r));
            summaries.len() - 1
        });
        summaries[slot].absorb(r);
    }
    summaries
}

/// `aggregate` then filter by name or email
pub fn search(requests: &[CertificateRequest], query: &str) -> Vec<RequesterSummary> {
    aggregate(requests)
        .into_iter()
        .filter(|s| s.matches(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::certificate_request::fixtures::request;
    use crate::domain::value_object::request_status::RequestStatus;

    fn sample() -> Vec<CertificateRequest> {
        let mut newest = request(12, "Somchai J.", "Somchai@Example.com ", RequestStatus::AtHr);
        newest.selected_types = vec![CertificateType::KrungThaiBank];
        newest.mobile_phone = "0899999999".to_string();
        newest.last_email_status = Some("ส่งแล้ว".to_string());

        let mut oldest = request(3, "Somchai", "somchai@example.com", RequestStatus::Returned);
        oldest.selected_types = vec![
            CertificateType::SalaryCertificate,
            CertificateType::KrungThaiBank,
        ];

        vec![
            newest,
            request(7, "Malee", "malee@example.com", RequestStatus::SentHrAdmin),
            oldest,
        ]
    }

    #[test]
    fn test_groups_by_canonical_email() {
        let summaries = aggregate(&sample());
        assert_eq!(summaries.len(), 2);

        let somchai = &summaries[0];
        assert_eq!(somchai.request_count, 2);
        assert_eq!(somchai.full_name, "Somchai J.");
        assert_eq!(somchai.mobile_phone, "0899999999");
        assert_eq!(somchai.latest_request_id, RequestId::new(12));
        assert_eq!(somchai.notification, NotificationState::Sent);
        assert_eq!(
            somchai.requested_types,
            vec![CertificateType::KrungThaiBank, CertificateType::SalaryCertificate]
        );
    }

    #[test]
    fn test_most_recent_wins_regardless_of_order() {
        let mut requests = sample();
        requests.reverse();
        let somchai = aggregate(&requests)
            .into_iter()
            .find(|s| s.request_count == 2)
            .unwrap();
        assert_eq!(somchai.full_name, "Somchai J.");
        assert_eq!(somchai.last_email_status, "ส่งแล้ว");
    }

    #[test]
    fn test_default_email_status() {
        let summaries = aggregate(&sample());
        assert_eq!(summaries[1].last_email_status, NEVER_SENT);
        assert_eq!(summaries[1].notification, NotificationState::Pending);
    }

    #[test]
    fn test_notification_state() {
        assert_eq!(
            NotificationState::from_outcome("ส่งไม่ได้: mailbox full"),
            NotificationState::Failed
        );
        assert_eq!(NotificationState::from_outcome("ส่งแล้ว"), NotificationState::Sent);
    }

    #[test]
    fn test_search() {
        let requests = sample();
        assert_eq!(search(&requests, "MALEE").len(), 1);
        assert_eq!(search(&requests, "example.com").len(), 2);
        assert_eq!(search(&requests, "").len(), 2);
        assert!(search(&requests, "nobody").is_empty());
    }
}
