//! Store selection
//!
//! One store is picked at startup and used for the life of the process.

use platform::http_client::HttpClientConfig;

use super::{embedded::EmbeddedStore, web_app::WebAppStore};
use crate::domain::entity::{
    certificate_request::CertificateRequest, submission::NewCertificateRequest,
};
use crate::domain::store::{RequestStore, StoreResult};
use crate::domain::value_object::{request_id::RequestId, request_status::RequestStatus};

/// Remote store settings
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Spreadsheet web app endpoint; the embedded store is used when unset
    pub webapp_url: Option<String>,
    pub http: HttpClientConfig,
}

/// The store chosen by `probe`
#[derive(Clone)]
pub enum AnyStore {
    WebApp(WebAppStore),
    Embedded(EmbeddedStore),
}

impl AnyStore {
    /// Pick the web app when an endpoint is configured, else the embedded store
    pub fn probe(config: &StoreConfig) -> Result<Self, reqwest::Error> {
        let url = config
            .webapp_url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty());

        match url {
            Some(url) => {
                tracing::info!(endpoint = %url, "Using spreadsheet web app store");
                Ok(Self::WebApp(WebAppStore::from_config(&config.http, url)?))
            }
            None => {
                tracing::warn!("No web app URL configured, using embedded store (not persisted)");
                Ok(Self::Embedded(EmbeddedStore::new()))
            }
        }
    }

    /// Name of the selected channel, for logs and the sync endpoint
    pub const fn channel(&self) -> &'static str {
        match self {
            Self::WebApp(_) => "webApp",
            Self::Embedded(_) => "embedded",
        }
    }
}

impl RequestStore for AnyStore {
    async fn list(&self) -> StoreResult<Vec<CertificateRequest>> {
        match self {
            Self::WebApp(s) => s.list().await,
            Self::Embedded(s) => s.list().await,
        }
    }

    async fn create(&self, request: &NewCertificateRequest) -> StoreResult<RequestId> {
        match self {
            Self::WebApp(s) => s.create(request).await,
            Self::Embedded(s) => s.create(request).await,
        }
    }

    async fn set_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()> {
        match self {
            Self::WebApp(s) => s.set_status(id, status).await,
            Self::Embedded(s) => s.set_status(id, status).await,
        }
    }

    async fn set_receipt(&self, id: RequestId, signer: &str) -> StoreResult<()> {
        match self {
            Self::WebApp(s) => s.set_receipt(id, signer).await,
            Self::Embedded(s) => s.set_receipt(id, signer).await,
        }
    }

    async fn delete(&self, id: RequestId) -> StoreResult<()> {
        match self {
            Self::WebApp(s) => s.delete(id).await,
            Self::Embedded(s) => s.delete(id).await,
        }
    }

    async fn notify(&self, id: RequestId) -> StoreResult<String> {
        match self {
            Self::WebApp(s) => s.notify(id).await,
            Self::Embedded(s) => s.notify(id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_without_url_is_embedded() {
        let store = AnyStore::probe(&StoreConfig::default()).unwrap();
        assert_eq!(store.channel(), "embedded");

        let blank = StoreConfig {
            webapp_url: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(AnyStore::probe(&blank).unwrap().channel(), "embedded");
    }

    #[test]
    fn test_probe_with_url_is_web_app() {
        let config = StoreConfig {
            webapp_url: Some("https://script.google.com/macros/s/abc/exec".to_string()),
            ..Default::default()
        };
        let store = AnyStore::probe(&config).unwrap();
        assert_eq!(store.channel(), "webApp");
    }
}
