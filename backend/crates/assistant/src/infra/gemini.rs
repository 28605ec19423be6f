//! Gemini client
//!
//! Plain `generateContent` over reqwest: system instruction, the earlier
//! turns, then the new user turn.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::config::AssistantConfig;
use crate::domain::message::{ChatMessage, ChatRole};
use crate::domain::model::ChatModel;
use crate::error::{AssistantError, AssistantResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    system_instruction: Instruction<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Instruction<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: ChatRole,
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate, if any
    fn text(self) -> Option<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    config: AssistantConfig,
}

impl GeminiClient {
    pub fn new(config: AssistantConfig) -> Result<Self, reqwest::Error> {
        let client = platform::http_client::build_client(&config.http)?;
        Ok(Self { client, config })
    }

    pub fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

impl ChatModel for GeminiClient {
    async fn reply(&self, history: &[ChatMessage], message: &str) -> AssistantResult<Option<String>> {
        let api_key = self.config.api_key.as_deref().ok_or(AssistantError::NotConfigured)?;

        let contents = history
            .iter()
            .map(|turn| Content {
                role: turn.role,
                parts: [Part { text: &turn.text }],
            })
            .chain(std::iter::once(Content {
                role: ChatRole::User,
                parts: [Part { text: message }],
            }))
            .collect();

        let body = GenerateRequest {
            system_instruction: Instruction {
                parts: [Part {
                    text: &self.config.system_instruction,
                }],
            },
            contents,
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
            },
        };

        tracing::debug!(model = %self.config.model, turns = history.len() + 1, "Calling Gemini");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::Decode(e.to_string()))?;
        Ok(parsed.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer, key: Option<&str>) -> GeminiClient {
        let config = AssistantConfig {
            base_url: server.uri(),
            ..AssistantConfig::default()
        }
        .with_api_key(key.map(str::to_string));
        GeminiClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_request_shape_and_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/gemini-3-flash-preview:generateContent"))
            .and(header("x-goog-api-key", "k-1"))
            .and(body_partial_json(json!({
                "contents": [
                    { "role": "model", "parts": [{ "text": "สวัสดีค่ะ" }] },
                    { "role": "user", "parts": [{ "text": "ขอหนังสือรับรองเงินเดือนยังไง" }] }
                ],
                "generationConfig": { "temperature": 0.7 }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "role": "model", "parts": [
                    { "text": "กรอกแบบฟอร์ม" }, { "text": "ได้เลยค่ะ" }
                ] } }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client(&server, Some("k-1"))
            .reply(&[ChatMessage::model("สวัสดีค่ะ")], "ขอหนังสือรับรองเงินเดือนยังไง")
            .await
            .unwrap();
        assert_eq!(reply.as_deref(), Some("กรอกแบบฟอร์มได้เลยค่ะ"));
    }

    #[tokio::test]
    async fn test_empty_candidates_is_no_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let reply = client(&server, Some("k")).reply(&[], "hi").await.unwrap();
        assert!(reply.is_none());
    }

    #[tokio::test]
    async fn test_http_error_is_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key invalid"))
            .mount(&server)
            .await;

        let err = client(&server, Some("bad")).reply(&[], "hi").await.err().unwrap();
        assert!(matches!(err, AssistantError::Status { status: 403, .. }));
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let gemini = client(&server, Some("  "));
        assert!(!gemini.is_configured());
        assert!(matches!(
            gemini.reply(&[], "hi").await,
            Err(AssistantError::NotConfigured)
        ));
    }
}
