use serde::{Deserialize, Deserializer, Serialize};

use super::ConversationTurn;
use crate::domain::DomainError;

/// Payload of one `POST /submit` call.
///
/// Decoded from the request body, consumed once, then echoed back with
/// `response` filled in. Nothing about it outlives the request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default, deserialize_with = "null_as_default")]
    prompt: String,
    #[serde(default, deserialize_with = "null_as_default")]
    past_conversations: Vec<ConversationTurn>,
    #[serde(default, deserialize_with = "null_as_default")]
    response: String,
}

/// Browser and Go clients send `null` for an empty list or unset string.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Submission {
    pub fn new(prompt: impl Into<String>, past_turns: Vec<ConversationTurn>) -> Self {
        Self {
            prompt: prompt.into(),
            past_conversations: past_turns,
            response: String::new(),
        }
    }

    /// Decode a raw wire payload. Empty or malformed bodies are a `Decode` error.
    pub fn from_slice(raw: &[u8]) -> Result<Self, DomainError> {
        serde_json::from_slice(raw).map_err(|e| DomainError::decode(e.to_string()))
    }

    /// Reject submissions that must not reach the upstream.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.prompt.is_empty() {
            return Err(DomainError::validation("prompt is required"));
        }
        Ok(())
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.response = response.into();
        self
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn past_turns(&self) -> &[ConversationTurn] {
        &self.past_conversations
    }

    pub fn response(&self) -> &str {
        &self.response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Role;

    #[test]
    fn decodes_prompt_and_history() {
        let raw = br#"{
            "prompt": "and then?",
            "pastConversations": [
                {"role": "user", "content": "tell me a story"},
                {"role": "assistant", "content": "once upon a time"}
            ]
        }"#;
        let submission = Submission::from_slice(raw).unwrap();
        assert_eq!(submission.prompt(), "and then?");
        assert_eq!(submission.past_turns().len(), 2);
        assert_eq!(submission.past_turns()[1].role(), Role::Assistant);
        assert!(submission.response().is_empty());
    }

    #[test]
    fn missing_history_defaults_to_empty() {
        let submission = Submission::from_slice(br#"{"prompt":"hi"}"#).unwrap();
        assert!(submission.past_turns().is_empty());
    }

    #[test]
    fn null_history_is_empty_history() {
        let submission =
            Submission::from_slice(br#"{"prompt":"hi","pastConversations":null}"#).unwrap();
        assert!(submission.past_turns().is_empty());
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn null_prompt_fails_validation() {
        let submission =
            Submission::from_slice(br#"{"prompt":null,"pastConversations":[]}"#).unwrap();
        assert!(matches!(submission.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        let err = Submission::from_slice(b"").unwrap_err();
        assert!(matches!(err, DomainError::Decode(_)));
    }

    #[test]
    fn missing_prompt_fails_validation_not_decoding() {
        let submission = Submission::from_slice(br#"{"pastConversations":[]}"#).unwrap();
        assert!(matches!(submission.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn echo_carries_response_field() {
        let submission = Submission::new("hi", vec![]).with_response("hello");
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(value["prompt"], "hi");
        assert_eq!(value["response"], "hello");
        assert!(value["pastConversations"].as_array().unwrap().is_empty());
    }
}
