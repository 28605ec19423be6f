//! Staff Credentials
//!
//! One shared staff account, configured at startup.

use platform::crypto::constant_time_eq;
use std::fmt;

/// Configured staff username and password
#[derive(Clone)]
pub struct StaffCredentials {
    username: String,
    password: String,
}

impl StaffCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// An empty configured password disables staff login
    pub fn is_enabled(&self) -> bool {
        !self.password.is_empty()
    }

    /// Exact match on both fields
    pub fn verify(&self, username: &str, password: &str) -> bool {
        if !self.is_enabled() {
            return false;
        }

        // Evaluate both so a wrong username costs the same as a wrong password
        let user_ok = constant_time_eq(username.as_bytes(), self.username.as_bytes());
        let pass_ok = constant_time_eq(password.as_bytes(), self.password.as_bytes());
        user_ok & pass_ok
    }
}

impl fmt::Debug for StaffCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaffCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
