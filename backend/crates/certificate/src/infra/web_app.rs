//! Spreadsheet Web App Store
//!
//! Every call is a POST of `{"action": ..., "data": ...}` to a single
//! endpoint. The body is sent as `text/plain` so the web app accepts it
//! without a CORS preflight when the same contract is used from a browser.

use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use serde_json::{Value, json};

use platform::http_client::{HttpClientConfig, build_client};

use crate::domain::entity::{
    certificate_request::CertificateRequest, submission::NewCertificateRequest,
};
use crate::domain::store::{RequestStore, StoreAction, StoreError, StoreResult};
use crate::domain::value_object::{request_id::RequestId, request_status::RequestStatus};

const BODY_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Remote store reached over HTTP
#[derive(Clone)]
pub struct WebAppStore {
    client: Client,
    endpoint: String,
}

impl WebAppStore {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(
        config: &HttpClientConfig,
        endpoint: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_client(config)?, endpoint))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn call(&self, action: StoreAction, data: Option<Value>) -> StoreResult<Value> {
        let mut body = json!({ "action": action.wire_name() });
        if let Some(data) = data {
            body["data"] = data;
        }

        tracing::debug!(action = action.wire_name(), "Calling spreadsheet web app");
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, BODY_CONTENT_TYPE)
            .body(body.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Status(status.as_u16()));
        }

        let text = response.text().await?;
        let value: Value =
            serde_json::from_str(&text).map_err(|e| StoreError::Decode(e.to_string()))?;

        if let Some(error) = value.as_object().and_then(|o| o.get("error")) {
            let message = match error {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            return Err(StoreError::Rejected(message));
        }
        Ok(value)
    }
}

fn decode_rows(value: Value) -> StoreResult<Vec<CertificateRequest>> {
    let Value::Array(rows) = value else {
        return Err(StoreError::Decode("expected an array of requests".to_string()));
    };

    let total = rows.len();
    let requests: Vec<CertificateRequest> = rows
        .into_iter()
        .filter_map(|row| match serde_json::from_value(row) {
            Ok(r) => Some(r),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping undecodable spreadsheet row");
                None
            }
        })
        .collect();

    if requests.len() < total {
        tracing::warn!(
            decoded = requests.len(),
            total,
            "Some spreadsheet rows were skipped"
        );
    }
    Ok(requests)
}

fn decode_id(value: &Value) -> StoreResult<RequestId> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        Value::Object(o) => o.get("id").and_then(|v| decode_id(v).ok()).map(|id| id.value()),
        _ => None,
    };
    id.map(RequestId::new)
        .ok_or_else(|| StoreError::Decode(format!("expected a request id, got {value}")))
}

fn decode_outcome(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Object(o) => {
            let field = o.get("status").or_else(|| o.get("message")).cloned();
            match field {
                Some(Value::String(s)) => s,
                Some(other) => other.to_string(),
                None => Value::Object(o).to_string(),
            }
        }
        other => other.to_string(),
    }
}

impl RequestStore for WebAppStore {
    async fn list(&self) -> StoreResult<Vec<CertificateRequest>> {
        decode_rows(self.call(StoreAction::List, None).await?)
    }

    async fn create(&self, request: &NewCertificateRequest) -> StoreResult<RequestId> {
        let data = serde_json::to_value(request).map_err(|e| StoreError::Decode(e.to_string()))?;
        let value = self.call(StoreAction::Create, Some(data)).await?;
        decode_id(&value)
    }

    async fn set_status(&self, id: RequestId, status: RequestStatus) -> StoreResult<()> {
        let data = json!({ "id": id, "status": status });
        self.call(StoreAction::SetStatus, Some(data)).await?;
        Ok(())
    }

    async fn set_receipt(&self, id: RequestId, signer: &str) -> StoreResult<()> {
        let data = json!({ "id": id, "sign": signer });
        self.call(StoreAction::SetReceipt, Some(data)).await?;
        Ok(())
    }

    async fn delete(&self, id: RequestId) -> StoreResult<()> {
        self.call(StoreAction::Delete, Some(json!(id))).await?;
        Ok(())
    }

    async fn notify(&self, id: RequestId) -> StoreResult<String> {
        let value = self.call(StoreAction::Notify, Some(json!(id))).await?;
        Ok(decode_outcome(value))
    }
}
