use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::application::{assemble_messages, ChatClient};
use crate::domain::{ConversationTurn, DomainError, UpstreamCallParameters};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Chat Completions request payload: the fixed parameters merged with the
/// assembled messages.
#[derive(Serialize)]
struct ApiRequest<'a> {
    #[serde(flatten)]
    params: &'a UpstreamCallParameters,
    messages: &'a [ConversationTurn],
}

/// Minimal subset of the Chat Completions response we care about.
#[derive(Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// HTTP client for the OpenAI Chat Completions API.
///
/// Every call uses the same [`UpstreamCallParameters`], prefixes the fixed
/// system instruction and sends the key as a bearer token. No timeout or retry
/// is layered on top of reqwest's defaults: one attempt, fail fast.
///
/// Override the base URL to target any compatible server:
///
/// ```text
/// chat-relay serve --upstream-url http://localhost:1234
/// ```
pub struct OpenAiChatClient {
    client: reqwest::Client,
    params: UpstreamCallParameters,
    /// Full endpoint URL (base + COMPLETIONS_PATH).
    url: String,
}

impl OpenAiChatClient {
    pub fn new(base_url: impl Into<String>, params: UpstreamCallParameters) -> Self {
        let base: String = base_url.into();
        let url = format!("{}{}", base.trim_end_matches('/'), COMPLETIONS_PATH);
        Self {
            client: reqwest::Client::new(),
            params,
            url,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Pick the reply out of a decoded success body.
    fn first_reply(api_response: ApiResponse) -> Result<String, DomainError> {
        let choice = api_response
            .choices
            .into_iter()
            .next()
            .ok_or(DomainError::EmptyResponse)?;
        Ok(choice
            .message
            .content
            .unwrap_or_default()
            .trim()
            .to_string())
    }
}

#[async_trait]
impl ChatClient for OpenAiChatClient {
    async fn complete(
        &self,
        prompt: &str,
        credential: &str,
        past_turns: &[ConversationTurn],
    ) -> Result<String, DomainError> {
        let messages = assemble_messages(prompt, past_turns);
        let request = ApiRequest {
            params: &self.params,
            messages: &messages,
        };

        let body = serde_json::to_vec(&request)
            .map_err(|e| DomainError::serialization(format!("OpenAiChatClient: {e}")))?;

        debug!(
            "OpenAiChatClient: sending {} messages to {}",
            messages.len(),
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(credential)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| DomainError::transport(format!("OpenAiChatClient: request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("OpenAiChatClient: API returned {status}: {body}");
            return Err(DomainError::upstream_status(status.as_u16(), body));
        }

        let bytes = response.bytes().await.map_err(|e| {
            DomainError::transport(format!("OpenAiChatClient: failed to read response: {e}"))
        })?;

        let api_response: ApiResponse = serde_json::from_slice(&bytes).map_err(|e| {
            DomainError::deserialization(format!("OpenAiChatClient: failed to parse response: {e}"))
        })?;

        Self::first_reply(api_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> ApiResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = OpenAiChatClient::new("http://localhost:1234/", UpstreamCallParameters::default());
        assert_eq!(client.url(), "http://localhost:1234/v1/chat/completions");
    }

    #[test]
    fn request_merges_parameters_and_messages() {
        let params = UpstreamCallParameters::default();
        let messages = assemble_messages("hi", &[]);
        let value = serde_json::to_value(ApiRequest {
            params: &params,
            messages: &messages,
        })
        .unwrap();

        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["max_tokens"], 4000);
        assert_eq!(value["temperature"], 1.0);
        assert_eq!(value["top_p"], 1.0);
        assert_eq!(value["frequency_penalty"], 0.0);
        assert_eq!(value["presence_penalty"], 0.6);
        assert_eq!(value["stop"], serde_json::json!([" Human:", " AI:"]));
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
    }

    #[test]
    fn first_reply_is_trimmed() {
        let response = decode(
            r#"{"id":"x","object":"chat.completion","created":1,"model":"m",
                "choices":[{"message":{"role":"assistant","content":"  Hello!  "}},
                           {"message":{"role":"assistant","content":"ignored"}}]}"#,
        );
        assert_eq!(OpenAiChatClient::first_reply(response).unwrap(), "Hello!");
    }

    #[test]
    fn zero_choices_is_empty_response() {
        let err = OpenAiChatClient::first_reply(decode(r#"{"choices":[]}"#)).unwrap_err();
        assert!(matches!(err, DomainError::EmptyResponse));

        let err = OpenAiChatClient::first_reply(decode(r#"{}"#)).unwrap_err();
        assert!(matches!(err, DomainError::EmptyResponse));
    }
}
