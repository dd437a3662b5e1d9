use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use super::{
    fallback::pick_fallback,
    model::{
        Expression,
        ExpressionFetch,
    },
};
use crate::core::CoachError;

pub const OPENROUTER_ENDPOINT: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_MODEL: &str = "openai/gpt-4o-mini";

const APP_TITLE: &str = "Natively";
const APP_REFERER: &str = "app://natively";

const PROMPT: &str = r#"Generate a random English learning scenario comparing direct translation vs native speaker expression.

Respond with ONLY a valid JSON object (no additional text) in this exact format:
{
  "topic": "Brief topic name (3-5 words)",
  "context": "Short scenario when this phrase would be used",
  "directExpression": "How a non-native English speaker might directly translate the phrase, super simple with several words!",
  "nativeExpression": "How a native english speaker would say in a native way or slang",
  "category": "One of: Daily Life, Social, Communication",
  "imagePrompt": "Descriptive phrase for image search (2-4 words, describe the scene)"
}

Instructions:
- Focus on short phrases or everyday expressions (not full conversations or formal writing).
- "directExpression" should sound like simple words combination.
- "nativeExpression" should sound naturally, for example i am into you, not i like you.
- Do NOT include extra explanation, only return the JSON object.
- Make sure both expressions mean the same thing in the same situation."#;

/// Read-only provider configuration, built once from settings and
/// passed in explicitly.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// `None` disables the network path entirely.
    pub api_key: Option<String>,
    pub model: String,
    pub endpoint: String,
}

impl ProviderConfig {
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self { api_key, model: model.into(), endpoint: OPENROUTER_ENDPOINT.to_string() }
    }

    pub fn offline() -> Self {
        Self::new(None, DEFAULT_MODEL)
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// Thin client for the OpenRouter chat-completion endpoint.
///
/// `fetch_expression` never fails outwardly: any failure between
/// request and parse collapses into a pick from the embedded fallback
/// list, marked as such on the result.
#[derive(Clone)]
pub struct ExpressionProvider {
    client: Client,
    config: ProviderConfig,
}

impl ExpressionProvider {
    pub fn new(config: ProviderConfig) -> Result<Self, CoachError> {
        let client = Client::builder()
            .build()
            .map_err(|e| CoachError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self { client, config })
    }

    pub fn has_credential(&self) -> bool {
        self.config.api_key.is_some()
    }

    pub async fn fetch_expression(&self) -> ExpressionFetch {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return ExpressionFetch::fallback(pick_fallback(&mut rand::rng()));
        };

        match self.request_expression(api_key).await {
            Ok(expression) => ExpressionFetch::generated(expression),
            Err(e) => {
                eprintln!("Expression generation failed, using fallback: {}", e);
                ExpressionFetch::fallback(pick_fallback(&mut rand::rng()))
            }
        }
    }

    async fn request_expression(&self, api_key: &str) -> Result<Expression, CoachError> {
        let body = json!({
            "model": self.config.model,
            "messages": [{ "role": "user", "content": PROMPT }],
            "temperature": 0.8,
            "max_tokens": 500,
        });

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.endpoint))
            .bearer_auth(api_key)
            .header("HTTP-Referer", APP_REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(CoachError::ApiStatus(response.status().as_u16()));
        }

        let data: ChatResponse = response.json().await?;

        let content = data
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(CoachError::MissingContent)?;

        let expression: Expression = serde_json::from_str(strip_code_fence(&content))?;
        Ok(expression)
    }
}

/// Strips an optional surrounding markdown code fence (```json or
/// bare ```) so the remainder can be parsed strictly as JSON.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();

    for marker in ["```json", "```"] {
        if let Some(rest) = trimmed.strip_prefix(marker) {
            return rest.strip_suffix("```").unwrap_or(rest).trim();
        }
    }

    trimmed
}

#[cfg(test)]
mod tests {
    use std::{
        io::{
            Read,
            Write,
        },
        net::{
            TcpListener,
            TcpStream,
        },
        thread,
    };

    use super::*;
    use crate::expression::{
        fallback::fallback_expressions,
        model::ExpressionSource,
    };

    // No mock-HTTP crate in the stack, so failure/success paths are
    // exercised against a one-shot local server with a canned reply.
    fn spawn_response_server(status_line: &str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let response = format!(
            "{status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );

        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                read_full_request(&mut stream);
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        format!("http://{}", addr)
    }

    fn read_full_request(stream: &mut TcpStream) {
        let mut data = Vec::new();
        let mut buf = [0u8; 2048];

        let header_end = loop {
            let n = stream.read(&mut buf).unwrap_or(0);
            if n == 0 {
                return;
            }
            data.extend_from_slice(&buf[..n]);
            if let Some(pos) = data.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };

        let headers = String::from_utf8_lossy(&data[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);

        while data.len() < header_end + content_length {
            let n = stream.read(&mut buf).unwrap_or(0);
            if n == 0 {
                break;
            }
            data.extend_from_slice(&buf[..n]);
        }
    }

    fn provider_with_endpoint(endpoint: String) -> ExpressionProvider {
        let mut config = ProviderConfig::new(Some("test-key".to_string()), "test/model");
        config.endpoint = endpoint;
        ExpressionProvider::new(config).unwrap()
    }

    fn assert_is_known_fallback(fetch: &ExpressionFetch) {
        assert_eq!(fetch.source, ExpressionSource::Fallback);
        assert!(fallback_expressions().contains(&fetch.expression));
    }

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fence("  {\"a\":1}  "), "{\"a\":1}");
        // Unterminated fences still leave parseable content.
        assert_eq!(strip_code_fence("```json\n{\"a\":1}"), "{\"a\":1}");
    }

    #[tokio::test]
    async fn test_fetch_without_credential_resolves_to_fallback() {
        let provider = ExpressionProvider::new(ProviderConfig::offline()).unwrap();

        for _ in 0..10 {
            let fetch = provider.fetch_expression().await;
            assert_is_known_fallback(&fetch);
        }
    }

    #[tokio::test]
    async fn test_server_error_resolves_to_fallback() {
        let endpoint =
            spawn_response_server("HTTP/1.1 500 Internal Server Error", "{}".to_string());
        let provider = provider_with_endpoint(endpoint);

        let fetch = provider.fetch_expression().await;
        assert_is_known_fallback(&fetch);
    }

    #[tokio::test]
    async fn test_empty_choices_resolves_to_fallback() {
        let body = json!({ "choices": [] }).to_string();
        let endpoint = spawn_response_server("HTTP/1.1 200 OK", body);
        let provider = provider_with_endpoint(endpoint);

        let fetch = provider.fetch_expression().await;
        assert_is_known_fallback(&fetch);
    }

    #[tokio::test]
    async fn test_unparseable_content_resolves_to_fallback() {
        let body = json!({
            "choices": [{ "message": { "content": "Sorry, I can't help with that." } }]
        })
        .to_string();
        let endpoint = spawn_response_server("HTTP/1.1 200 OK", body);
        let provider = provider_with_endpoint(endpoint);

        let fetch = provider.fetch_expression().await;
        assert_is_known_fallback(&fetch);
    }

    #[tokio::test]
    async fn test_fenced_json_content_is_parsed_exactly() {
        let content = "```json\n{\"topic\":\"Running late\",\"context\":\"You text a friend you are behind schedule\",\"directExpression\":\"I will arrive late.\",\"nativeExpression\":\"I'm running behind!\",\"category\":\"Daily Life\"}\n```";
        let body = json!({
            "choices": [{ "message": { "content": content } }]
        })
        .to_string();
        let endpoint = spawn_response_server("HTTP/1.1 200 OK", body);
        let provider = provider_with_endpoint(endpoint);

        let fetch = provider.fetch_expression().await;
        assert_eq!(fetch.source, ExpressionSource::Generated);
        assert_eq!(fetch.expression.topic, "Running late");
        assert_eq!(fetch.expression.context, "You text a friend you are behind schedule");
        assert_eq!(fetch.expression.direct_expression, "I will arrive late.");
        assert_eq!(fetch.expression.native_expression, "I'm running behind!");
        assert_eq!(fetch.expression.category, "Daily Life");
        assert_eq!(fetch.expression.image_prompt, None);
    }
}
