/// LLM Client: the single point of entry for chat-completion calls.
///
/// No other module talks to the extraction service over HTTP. Callers depend
/// on the `CompletionService` trait so the pipeline can run against a scripted
/// fake in tests.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

/// Near-deterministic sampling for field extraction.
pub const TEMPERATURE: f32 = 0.2;
/// Output cap; the five-key JSON object fits comfortably.
pub const MAX_TOKENS: u32 = 300;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    /// Rate limiting, server errors and transport failures may succeed on a
    /// later attempt. Undecodable bodies and other statuses will not.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(e) => !e.is_decode(),
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            LlmError::EmptyContent => false,
        }
    }
}

/// Capability boundary for the extraction service: prompt in, raw text out.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Trimmed content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

/// Chat-completions client used for field extraction.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl LlmClient {
    pub fn new(api_key: String, config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.llm_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", config.openai_base_url),
            model: config.openai_model.clone(),
            max_retries: config.llm_max_retries,
            retry_base_delay: Duration::from_millis(config.llm_retry_base_ms),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw call to the chat-completions API.
    /// With `max_retries > 0`, retries 429, 5xx and transport errors with
    /// exponential backoff; otherwise a single attempt is made.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let mut attempt: u32 = 0;
        loop {
            match self.send(&request_body).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    attempt += 1;
                    // Exponential backoff: base, 2x base, 4x base...
                    let delay = self.retry_base_delay * (1u32 << (attempt - 1).min(6));
                    warn!(
                        "LLM call attempt {} failed ({}), retrying after {}ms...",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One HTTP round trip.
    async fn send(&self, request_body: &ChatRequest<'_>) -> Result<ChatResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: api_error_message(body),
            });
        }

        let chat_response: ChatResponse = response.json().await?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(chat_response)
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let response = self.call(prompt, system).await?;
        response
            .text()
            .map(str::to_string)
            .ok_or(LlmError::EmptyContent)
    }
}

/// Pulls `error.message` out of an error body, falling back to the raw body.
fn api_error_message(body: String) -> String {
    serde_json::from_str::<ApiError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// A missing closing fence is tolerated.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const CHAT_OK: &str = r#"{"choices": [{"message": {"role": "assistant", "content": "{\"name\": \"Jane Doe\"}"}}]}"#;

    /// Local chat-completions endpoint that answers each connection with the
    /// next scripted `(status, body)` pair and records the raw requests.
    /// Once the script runs out the listener is dropped.
    async fn scripted_endpoint(replies: Vec<(u16, &'static str)>) -> (String, Arc<Mutex<Vec<String>>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/v1", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = requests.clone();

        tokio::spawn(async move {
            for (status, body) in replies {
                let (mut stream, _) = listener.accept().await.unwrap();
                let request = read_request(&mut stream).await;
                seen.lock().unwrap().push(request);

                let response = format!(
                    "HTTP/1.1 {status} Scripted\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(response.as_bytes()).await.unwrap();
                stream.shutdown().await.ok();
            }
        });

        (base_url, requests)
    }

    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let head = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = head
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn client_for(base_url: &str, max_retries: u32) -> LlmClient {
        let config = Config {
            openai_base_url: base_url.to_string(),
            llm_max_retries: max_retries,
            llm_retry_base_ms: 1,
            llm_timeout_secs: 10,
            ..Config::default()
        };
        LlmClient::new("sk-test".to_string(), &config).unwrap()
    }

    #[tokio::test]
    async fn test_call_posts_chat_request_with_bearer_auth() {
        let (base_url, requests) = scripted_endpoint(vec![(200, CHAT_OK)]).await;
        let client = client_for(&base_url, 0);

        let text = client.complete("resume text", "system text").await.unwrap();
        assert_eq!(text, "{\"name\": \"Jane Doe\"}");

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let raw = requests[0].to_lowercase();
        assert!(raw.starts_with("post /v1/chat/completions "), "{raw}");
        assert!(raw.contains("authorization: bearer sk-test"));
        assert!(requests[0].contains("\"content\":\"resume text\""));
        assert!(requests[0].contains("\"content\":\"system text\""));
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let (base_url, requests) = scripted_endpoint(vec![(401, body), (200, CHAT_OK)]).await;
        let client = client_for(&base_url, 3);

        let err = client.call("p", "s").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_server_error_then_success_is_retried() {
        let (base_url, requests) =
            scripted_endpoint(vec![(500, "upstream exploded"), (200, CHAT_OK)]).await;
        let client = client_for(&base_url, 1);

        let response = client.call("p", "s").await.unwrap();
        assert_eq!(response.text(), Some("{\"name\": \"Jane Doe\"}"));
        assert_eq!(requests.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_retries_exhausted_returns_last_error() {
        let (base_url, requests) = scripted_endpoint(vec![
            (429, r#"{"error": {"message": "slow down"}}"#),
            (503, "busy"),
            (429, r#"{"error": {"message": "still too fast"}}"#),
        ])
        .await;
        let client = client_for(&base_url, 2);

        let err = client.call("p", "s").await.unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "still too fast");
            }
            other => panic!("expected API error, got {other:?}"),
        }
        assert_eq!(requests.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_zero_retries_makes_one_attempt() {
        let (base_url, requests) = scripted_endpoint(vec![(503, "busy"), (200, CHAT_OK)]).await;
        let client = client_for(&base_url, 0);

        let err = client.call("p", "s").await.unwrap_err();
        assert!(matches!(err, LlmError::Api { status: 503, .. }), "got {err:?}");
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_null_content_is_empty_content_error() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let (base_url, _requests) = scripted_endpoint(vec![(200, body)]).await;
        let client = client_for(&base_url, 0);

        let err = client.complete("p", "s").await.unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent), "got {err:?}");
    }

    #[test]
    fn test_retryable_statuses() {
        let api = |status| LlmError::Api {
            status,
            message: String::new(),
        };
        assert!(api(429).is_retryable());
        assert!(api(500).is_retryable());
        assert!(api(503).is_retryable());
        assert!(!api(400).is_retryable());
        assert!(!api(401).is_retryable());
        assert!(!LlmError::EmptyContent.is_retryable());
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_unterminated() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_request_body_shape() {
        let body = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["max_tokens"], 300);
        assert!((value["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_response_text_takes_first_choice_trimmed() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "  {\"name\": null}\n"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("{\"name\": null}"));
        assert_eq!(response.usage.unwrap().completion_tokens, 5);
    }

    #[test]
    fn test_response_without_content_has_no_text() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(empty.text().is_none());
    }

    #[test]
    fn test_api_error_message_extracts_nested_message() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        assert_eq!(
            api_error_message(body.to_string()),
            "Incorrect API key provided"
        );
        assert_eq!(api_error_message("bad gateway".to_string()), "bad gateway");
    }

    #[test]
    fn test_client_endpoint_uses_base_url() {
        let config = Config {
            openai_base_url: "http://localhost:9999/v1".to_string(),
            ..Config::default()
        };
        let client = LlmClient::new("sk-test".to_string(), &config).unwrap();
        assert_eq!(client.endpoint, "http://localhost:9999/v1/chat/completions");
        assert_eq!(client.model(), "gpt-3.5-turbo");
    }
}
