use async_trait::async_trait;

use crate::domain::{ConversationTurn, DomainError};

/// Sends one conversation to a chat-completion model and returns its reply.
///
/// Implementors own message assembly, serialization and transport. Consumers
/// (e.g. [`crate::application::SubmitPromptUseCase`]) only see a reply string or
/// a classified [`DomainError`].
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send `past_turns` followed by `prompt`, authenticated with `credential`.
    ///
    /// Returns the first candidate's content with surrounding whitespace
    /// trimmed. A single attempt is made; nothing is retried.
    async fn complete(
        &self,
        prompt: &str,
        credential: &str,
        past_turns: &[ConversationTurn],
    ) -> Result<String, DomainError>;
}
