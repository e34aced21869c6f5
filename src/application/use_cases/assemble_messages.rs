use crate::domain::ConversationTurn;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";

/// Build the message sequence sent upstream:
/// `[system instruction] ++ past_turns ++ [user(prompt)]`.
///
/// The model reads order as chronology, so past turns keep caller order.
pub fn assemble_messages(prompt: &str, past_turns: &[ConversationTurn]) -> Vec<ConversationTurn> {
    let mut messages = Vec::with_capacity(past_turns.len() + 2);
    messages.push(ConversationTurn::system(SYSTEM_INSTRUCTION));
    messages.extend(past_turns.iter().cloned());
    messages.push(ConversationTurn::user(prompt));
    messages
}
