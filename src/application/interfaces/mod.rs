mod chat_client;
mod credential_provider;

pub use chat_client::*;
pub use credential_provider::*;
