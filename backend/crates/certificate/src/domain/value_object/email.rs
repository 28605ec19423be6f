//! Email Value Object
//!
//! Requesters type their address once per submission, so the same person can
//! appear with different casing. The address is kept as typed (trimmed) and
//! `canonical()` gives the key used for grouping and deletion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum email length (per RFC 5321)
const EMAIL_MAX_LENGTH: usize = 254;

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn parse(email: impl AsRef<str>) -> Option<Self> {
        let email = email.as_ref().trim();
        if email.len() > EMAIL_MAX_LENGTH || !Self::is_valid_format(email) {
            return None;
        }
        Some(Self(email.to_string()))
    }

    /// `local@domain.tld` where no part is empty and nothing contains
    /// whitespace or a second `@`.
    pub fn is_valid_format(email: &str) -> bool {
        let Some((local, domain)) = email.split_once('@') else {
            return false;
        };
        let clean = |part: &str| !part.chars().any(|c| c.is_whitespace() || c == '@');
        if local.is_empty() || !clean(local) || !clean(domain) {
            return false;
        }
        // Some dot with at least one character on each side
        domain
            .char_indices()
            .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
    }

    /// Create from a stored record (taken as-is)
    pub fn from_store(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    /// Get the email as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased, trimmed form used to identify a requester
    pub fn canonical(&self) -> String {
        self.0.trim().to_lowercase()
    }

    /// Case-insensitive equality
    pub fn same_requester(&self, other: &Email) -> bool {
        self.canonical() == other.canonical()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::parse("user@example.com").is_some());
        assert!(Email::parse("user.name@mahidol.ac.th").is_some());
        assert!(Email::parse("user+tag@example.com").is_some());
        assert!(Email::parse("  padded@example.com  ").is_some());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::parse("").is_none());
        assert!(Email::parse("userexample.com").is_none());
        assert!(Email::parse("user@").is_none());
        assert!(Email::parse("@example.com").is_none());
        assert!(Email::parse("user@@example.com").is_none());
        assert!(Email::parse("user@example").is_none());
        assert!(Email::parse("user@.com").is_none());
        assert!(Email::parse("user@example.").is_none());
        assert!(Email::parse("us er@example.com").is_none());
    }

    #[test]
    fn test_casing_is_kept_but_canonical_lowercases() {
        let email = Email::parse(" Somchai@Example.COM ").unwrap();
        assert_eq!(email.as_str(), "Somchai@Example.COM");
        assert_eq!(email.canonical(), "somchai@example.com");
        assert!(email.same_requester(&Email::from_store("somchai@example.com")));
    }
}
