//! Process configuration
//!
//! Read once from the environment (after `.env` is loaded).

use anyhow::{Context, bail};
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use assistant::AssistantConfig;
use certificate::{CertificateConfig, StoreConfig};
use session::{SessionConfig, StaffCredentials};

pub struct ApiConfig {
    pub addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub cache_dir: PathBuf,
    pub store: StoreConfig,
    pub certificate: CertificateConfig,
    pub session: SessionConfig,
    pub assistant: AssistantConfig,
}

fn var(name: &str) -> Option<String> {
    env::var(name).ok().map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = var("PORTAL_ADDR")
            .unwrap_or_else(|| "0.0.0.0:31113".to_string())
            .parse()
            .context("PORTAL_ADDR must be host:port")?;

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| "http://localhost:40922,http://127.0.0.1:40922".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        let poll_interval = match var("POLL_INTERVAL_SECS") {
            Some(secs) => Some(Duration::from_secs(
                secs.parse().context("POLL_INTERVAL_SECS must be a number of seconds")?,
            )),
            None => None,
        };

        let certificate = if cfg!(debug_assertions) {
            CertificateConfig::development()
        } else {
            CertificateConfig::default()
        };
        let mut session = if cfg!(debug_assertions) {
            SessionConfig::development()
        } else {
            SessionConfig::default()
        };
        if let Some(interval) = poll_interval {
            session = session.with_poll_interval(interval);
        }

        let staff_user = var("STAFF_USERNAME").unwrap_or_else(|| session.staff.username().to_string());
        match var("STAFF_PASSWORD") {
            Some(password) => session = session.with_staff(StaffCredentials::new(staff_user, password)),
            None if cfg!(debug_assertions) => {
                tracing::warn!("STAFF_PASSWORD not set, using the development staff password");
            }
            None => bail!("STAFF_PASSWORD must be set in production"),
        }

        if let Some(secure) = var("COOKIE_SECURE") {
            session.cookie.secure = secure
                .parse()
                .context("COOKIE_SECURE must be true or false")?;
        }

        let mut assistant = AssistantConfig::default().with_api_key(var("GEMINI_API_KEY"));
        if let Some(model) = var("GEMINI_MODEL") {
            assistant = assistant.with_model(model);
        }

        Ok(Self {
            addr,
            frontend_origins,
            cache_dir: var("LOCAL_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(".portal-cache")),
            store: StoreConfig {
                webapp_url: var("STORE_WEBAPP_URL"),
                ..StoreConfig::default()
            },
            certificate,
            session,
            assistant,
        })
    }
}
