//! Tracking search and the staff list filter.

use crate::domain::entity::certificate_request::CertificateRequest;

/// Requester-facing lookup: name contains the query (case-insensitive) or
/// the id equals it. An empty query finds nothing.
pub fn track<'a>(requests: &'a [CertificateRequest], query: &str) -> Vec<&'a CertificateRequest> {
    let q = query.trim();
    if q.is_empty() {
        return Vec::new();
    }
    let q_lower = q.to_lowercase();
    let q_id = q.strip_prefix('#').unwrap_or(q);

    requests
        .iter()
        .filter(|r| r.full_name.to_lowercase().contains(&q_lower) || r.id.to_string() == q_id)
        .collect()
}

/// Staff list filter over name, id and email. Empty query keeps everything.
pub fn filter<'a>(requests: &'a [CertificateRequest], query: &str) -> Vec<&'a CertificateRequest> {
    let q = query.trim().to_lowercase();
    requests
        .iter()
        .filter(|r| {
            q.is_empty()
                || r.full_name.to_lowercase().contains(&q)
                || r.id.to_string().contains(&q)
                || r.email.as_str().to_lowercase().contains(&q)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::certificate_request::fixtures::request;
    use crate::domain::value_object::request_status::RequestStatus;

    fn sample() -> Vec<CertificateRequest> {
        vec![
            request(1010, "Somchai Jaidee", "somchai@uni.ac.th", RequestStatus::AtHr),
            request(1001, "Malee Dee", "malee@uni.ac.th", RequestStatus::Returned),
        ]
    }

    #[test]
    fn test_track_empty_query_finds_nothing() {
        assert!(track(&sample(), "").is_empty());
        assert!(track(&sample(), "   ").is_empty());
    }

    #[test]
    fn test_track_by_name_or_exact_id() {
        let requests = sample();
        assert_eq!(track(&requests, "SOMCHAI").len(), 1);
        assert_eq!(track(&requests, "1001")[0].full_name, "Malee Dee");
        assert_eq!(track(&requests, "#1010").len(), 1);
        // Partial ids do not match for requesters
        assert!(track(&requests, "100").is_empty());
    }

    #[test]
    fn test_filter() {
        let requests = sample();
        assert_eq!(filter(&requests, "").len(), 2);
        assert_eq!(filter(&requests, "100").len(), 2);
        assert_eq!(filter(&requests, "MALEE@").len(), 1);
        assert_eq!(filter(&requests, "jaidee").len(), 1);
    }
}
