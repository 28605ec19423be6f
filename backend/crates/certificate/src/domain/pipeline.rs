//! Status Pipeline
//!
//! Progress through the six processing states, transition classification and
//! the receipt gate.

use serde::Serialize;
use std::cmp::Ordering;

use super::entity::certificate_request::CertificateRequest;
use super::value_object::request_status::RequestStatus;

/// Fraction of the pipeline reached, `(position + 1) / 6`
pub fn progress(status: RequestStatus) -> f64 {
    (status.position() + 1) as f64 / RequestStatus::PIPELINE.len() as f64
}

/// How a status change moves a request along the pipeline.
///
/// Staff may set any status; the classification only feeds logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Transition {
    Forward,
    /// Same stage, different division
    Lateral,
    Backward,
    Unchanged,
}

impl Transition {
    pub fn classify(from: RequestStatus, to: RequestStatus) -> Self {
        if from == to {
            return Self::Unchanged;
        }
        match to.stage().cmp(&from.stage()) {
            Ordering::Greater => Self::Forward,
            Ordering::Equal => Self::Lateral,
            Ordering::Less => Self::Backward,
        }
    }

    #[inline]
    pub const fn is_backward(&self) -> bool {
        matches!(self, Self::Backward)
    }
}

/// Receipt refused because the document has not come back yet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptRejected {
    pub status: RequestStatus,
}

/// A receipt may be recorded once the document is back, or corrected if one
/// already exists.
pub fn check_receipt(request: &CertificateRequest) -> Result<(), ReceiptRejected> {
    if request.accepts_receipt() {
        Ok(())
    } else {
        Err(ReceiptRejected {
            status: request.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::certificate_request::fixtures::{request, with_receipt};

    #[test]
    fn test_progress_is_one_based() {
        assert!((progress(RequestStatus::AtHr) - 1.0 / 6.0).abs() < f64::EPSILON);
        assert!((progress(RequestStatus::ReturnedHrAdmin) - 4.0 / 6.0).abs() < f64::EPSILON);
        assert!((progress(RequestStatus::Returned) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_is_monotonic_in_pipeline_order() {
        let values: Vec<f64> = RequestStatus::PIPELINE.iter().map(|s| progress(*s)).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_classify() {
        use RequestStatus::*;
        assert_eq!(Transition::classify(AtHr, SentHrAdmin), Transition::Forward);
        assert_eq!(Transition::classify(SentHrAdmin, SentInternational), Transition::Lateral);
        assert_eq!(
            Transition::classify(ReturnedInternational, ReturnedHrAdmin),
            Transition::Lateral
        );
        assert_eq!(Transition::classify(Returned, AtHr), Transition::Backward);
        assert_eq!(Transition::classify(Returned, Returned), Transition::Unchanged);
        assert!(Transition::classify(SentHrAdmin, AtHr).is_backward());
    }

    #[test]
    fn test_receipt_gate() {
        for status in RequestStatus::PIPELINE {
            let req = request(1, "A", "a@b.co", status);
            assert_eq!(check_receipt(&req).is_ok(), status.accepts_receipt());
        }

        let rejected = check_receipt(&request(1, "A", "a@b.co", RequestStatus::SentHrAdmin));
        assert_eq!(
            rejected,
            Err(ReceiptRejected {
                status: RequestStatus::SentHrAdmin
            })
        );

        // Correction of an existing receipt is always allowed
        let corrected = with_receipt(request(1, "A", "a@b.co", RequestStatus::AtHr), "A");
        assert!(check_receipt(&corrected).is_ok());
    }
}
