//! Request ID Value Object
//!
//! Numeric identifier assigned by the remote spreadsheet. The portal never
//! mints ids itself except in the embedded store.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a certificate request (positive integer, unique per store)
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[display("{_0}")]
#[serde(transparent)]
pub struct RequestId(i64);

impl RequestId {
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for RequestId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl FromStr for RequestId {
    type Err = ParseIntError;

    /// Accepts `1042` as well as the `#1042` form printed on receipts
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        digits.parse::<i64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_hash_prefixed() {
        assert_eq!("1042".parse::<RequestId>().unwrap(), RequestId::new(1042));
        assert_eq!(" #7 ".parse::<RequestId>().unwrap(), RequestId::new(7));
        assert!("abc".parse::<RequestId>().is_err());
    }

    #[test]
    fn test_serde_is_a_bare_number() {
        let json = serde_json::to_string(&RequestId::new(12)).unwrap();
        assert_eq!(json, "12");
        let id: RequestId = serde_json::from_str("13").unwrap();
        assert_eq!(id.to_string(), "13");
    }
}
