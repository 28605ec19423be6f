//! Application Configuration
//!
//! Configuration for the Session application layer.

use chrono::Duration as IdleDuration;
use std::time::Duration;

/// Re-export cookie configuration from platform
pub use platform::cookie::CookieConfig;

use crate::domain::credentials::StaffCredentials;

/// Session application configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Browser session cookie
    pub cookie: CookieConfig,
    /// Shared staff account
    pub staff: StaffCredentials,
    /// Silent refresh period while staff watch a live screen (30 seconds)
    pub poll_interval: Duration,
    /// Sessions untouched this long are dropped (12 hours)
    pub idle_timeout: Duration,
    /// How often idle sessions are swept (10 minutes)
    pub sweep_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie: CookieConfig::default(),
            staff: StaffCredentials::new("admin", ""),
            poll_interval: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(12 * 3600),
            sweep_interval: Duration::from_secs(600),
        }
    }
}

impl SessionConfig {
    /// Plain-http cookie, a known staff password and faster polling
    pub fn development() -> Self {
        Self {
            cookie: CookieConfig::development(),
            staff: StaffCredentials::new("admin", "admin"),
            poll_interval: Duration::from_secs(10),
            ..Self::default()
        }
    }

    pub fn with_staff(mut self, staff: StaffCredentials) -> Self {
        self.staff = staff;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Idle timeout as a chrono duration for session timestamps
    pub fn max_idle(&self) -> IdleDuration {
        IdleDuration::from_std(self.idle_timeout).unwrap_or(IdleDuration::hours(12))
    }
}
