pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    assemble_messages, ChatClient, CredentialProvider, SubmitPromptUseCase, SYSTEM_INSTRUCTION,
};

pub use cli::Commands;

pub use connector::{
    router, serve, Container, ContainerConfig, EnvCredentialProvider, MockChatClient,
    OpenAiChatClient, PageRenderer, StaticCredentialProvider, MAX_SUBMIT_BODY_BYTES,
};

pub use domain::{ConversationTurn, DomainError, Role, Submission, UpstreamCallParameters};
