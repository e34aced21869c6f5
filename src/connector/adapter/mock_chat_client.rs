use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::{assemble_messages, ChatClient};
use crate::domain::{ConversationTurn, DomainError};

type ErrorFactory = Box<dyn Fn() -> DomainError + Send + Sync>;

enum Outcome {
    Reply(String),
    Fail(ErrorFactory),
}

/// In-process [`ChatClient`] that records every call it receives.
pub struct MockChatClient {
    outcome: Outcome,
    calls: AtomicUsize,
    last_credential: Mutex<Option<String>>,
    last_messages: Mutex<Vec<ConversationTurn>>,
}

impl MockChatClient {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_outcome(Outcome::Reply(reply.into()))
    }

    pub fn failing(make_error: impl Fn() -> DomainError + Send + Sync + 'static) -> Self {
        Self::with_outcome(Outcome::Fail(Box::new(make_error)))
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_credential: Mutex::new(None),
            last_messages: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_credential(&self) -> Option<String> {
        self.last_credential
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Messages the last call would have sent upstream.
    pub fn last_messages(&self) -> Vec<ConversationTurn> {
        self.last_messages
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn complete(
        &self,
        prompt: &str,
        credential: &str,
        past_turns: &[ConversationTurn],
    ) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_credential.lock() {
            *guard = Some(credential.to_string());
        }
        if let Ok(mut guard) = self.last_messages.lock() {
            *guard = assemble_messages(prompt, past_turns);
        }

        match &self.outcome {
            Outcome::Reply(reply) => Ok(reply.trim().to_string()),
            Outcome::Fail(make_error) => Err(make_error()),
        }
    }
}
