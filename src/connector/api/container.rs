use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use crate::application::{ChatClient, CredentialProvider, SubmitPromptUseCase};
use crate::connector::{EnvCredentialProvider, OpenAiChatClient, PageRenderer};
use crate::domain::UpstreamCallParameters;

pub struct ContainerConfig {
    /// Base URL of the chat-completion API (without the `/v1/...` path).
    pub upstream_url: String,
    /// Environment variable holding the upstream API key.
    pub api_key_env: String,
    /// Directory containing `index.html`.
    pub templates_dir: PathBuf,
}

pub struct Container {
    chat_client: Arc<dyn ChatClient>,
    credentials: Arc<dyn CredentialProvider>,
    page_renderer: PageRenderer,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        debug!("Loading templates from {}", config.templates_dir.display());
        let page_renderer = PageRenderer::from_dir(&config.templates_dir)?;

        debug!("Using chat-completion API at {}", config.upstream_url);
        let chat_client = Arc::new(OpenAiChatClient::new(
            config.upstream_url,
            UpstreamCallParameters::default(),
        ));
        let credentials = Arc::new(EnvCredentialProvider::new(config.api_key_env));

        Ok(Self::from_parts(chat_client, credentials, page_renderer))
    }

    /// Assemble a container from already-built collaborators.
    pub fn from_parts(
        chat_client: Arc<dyn ChatClient>,
        credentials: Arc<dyn CredentialProvider>,
        page_renderer: PageRenderer,
    ) -> Self {
        Self {
            chat_client,
            credentials,
            page_renderer,
        }
    }

    pub fn submit_use_case(&self) -> SubmitPromptUseCase {
        SubmitPromptUseCase::new(self.chat_client.clone(), self.credentials.clone())
    }

    pub fn page_renderer(&self) -> &PageRenderer {
        &self.page_renderer
    }
}
