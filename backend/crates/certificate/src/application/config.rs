//! Application Configuration
//!
//! Configuration for the certificate application layer.

/// Certificate application configuration
#[derive(Debug, Clone)]
pub struct CertificateConfig {
    /// Ready-for-pickup column size on the public board
    pub board_ready_limit: usize,
    /// Processing column size on the public board
    pub board_processing_limit: usize,
    /// Local store key of the last good snapshot
    pub snapshot_key: String,
    /// Local store key of the remembered profile
    pub profile_key: String,
    /// CSV export file name prefix
    pub export_prefix: String,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self {
            board_ready_limit: 6,
            board_processing_limit: 8,
            snapshot_key: "cert_requests".to_string(),
            profile_key: "user_profile".to_string(),
            export_prefix: "HR_DATABASE".to_string(),
        }
    }
}

impl CertificateConfig {
    /// Create config for development (separate cache keys)
    pub fn development() -> Self {
        Self {
            snapshot_key: "cert_requests_dev".to_string(),
            profile_key: "user_profile_dev".to_string(),
            ..Default::default()
        }
    }
}
