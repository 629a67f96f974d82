//! Gemini REST client (`models/{model}:generateContent`).

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use silentwatch_core::error::{GenerationError, Result, SilentWatchError};
use silentwatch_core::Prompt;

use super::TextGenerator;
use crate::config::GeminiSection;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Raw HTTPS text generator. One POST per call, no retries.
pub struct GeminiGenerator {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl GeminiGenerator {
    pub fn new(cfg: &GeminiSection, api_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()
            .map_err(|e| SilentWatchError::Internal(format!("http client build failed: {e}")))?;

        let model = cfg.model.trim().trim_start_matches("models/");
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            cfg.endpoint.trim_end_matches('/'),
            model
        );

        Ok(Self { http, url, api_key })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [RequestContent<'a>; 1],
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    fn first_text(self) -> std::result::Result<String, GenerationError> {
        self.candidates
            .into_iter()
            .next()
            .ok_or_else(|| GenerationError::Malformed("response contained no candidates".into()))?
            .content
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or_else(|| GenerationError::Malformed("first candidate has no text part".into()))
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn generate(&self, prompt: &Prompt) -> std::result::Result<String, GenerationError> {
        let body = GenerateRequest {
            contents: [RequestContent { parts: [RequestPart { text: prompt.as_str() }] }],
        };

        let response = self
            .http
            .post(&self.url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "received Gemini response");

        if !status.is_success() {
            return Err(GenerationError::from_status(status.as_u16()));
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Malformed(format!("failed to parse response: {e}")))?;

        parsed.first_text()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use silentwatch_core::Observation;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    const GENERATE_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn generator(endpoint: String) -> GeminiGenerator {
        let cfg = GeminiSection { endpoint, timeout_ms: 2000, ..Default::default() };
        GeminiGenerator::new(&cfg, "test-key".into()).expect("client")
    }

    fn prompt() -> Prompt {
        Prompt::for_observation(&Observation::new(700, 0.65, true))
    }

    #[test]
    fn url_strips_models_prefix_and_trailing_slash() {
        let cfg = GeminiSection {
            endpoint: "https://example.test/".into(),
            model: "models/gemini-1.0-pro".into(),
            ..Default::default()
        };
        let g = GeminiGenerator::new(&cfg, "k".into()).expect("client");
        assert_eq!(g.url(), "https://example.test/v1beta/models/gemini-1.0-pro:generateContent");
    }

    #[tokio::test]
    async fn sends_prompt_and_returns_first_candidate() {
        let server = MockServer::start().await;
        let p = prompt();

        Mock::given(method("POST"))
            .and(path(GENERATE_PATH))
            .and(header("x-goog-api-key", "test-key"))
            .and(body_json(json!({ "contents": [{ "parts": [{ "text": p.as_str() }] }] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [
                    { "content": { "parts": [{ "text": "Latency is 3x baseline." }] } },
                    { "content": { "parts": [{ "text": "second" }] } }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let text = generator(server.uri()).generate(&p).await.expect("generate");
        assert_eq!(text, "Latency is 3x baseline.");
    }

    #[tokio::test]
    async fn maps_error_statuses() {
        for (status, expected) in [
            (429u16, GenerationError::RateLimited),
            (404, GenerationError::NotFound),
            (500, GenerationError::Status(500)),
            (403, GenerationError::Status(403)),
        ] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(GENERATE_PATH))
                .respond_with(ResponseTemplate::new(status))
                .expect(1)
                .mount(&server)
                .await;

            let err = generator(server.uri()).generate(&prompt()).await.expect_err("must fail");
            assert_eq!(err, expected, "status {status}");
        }
    }

    #[tokio::test]
    async fn malformed_body_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .mount(&server)
            .await;

        let err = generator(server.uri()).generate(&prompt()).await.expect_err("must fail");
        assert!(matches!(err, GenerationError::Malformed(_)));

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = generator(server.uri()).generate(&prompt()).await.expect_err("must fail");
        assert!(matches!(err, GenerationError::Malformed(_)));
    }

    #[tokio::test]
    async fn connection_refused_is_transport_error() {
        // Bind then drop to get a port with nothing listening.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");
        drop(listener);

        let err = generator(format!("http://{addr}")).generate(&prompt()).await.expect_err("must fail");
        assert!(matches!(err, GenerationError::Transport(_)));
    }
}
