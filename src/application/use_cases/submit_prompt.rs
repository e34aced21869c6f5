use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::application::{ChatClient, CredentialProvider};
use crate::domain::{DomainError, Submission};

/// Validates a submission, calls the model once and returns the submission
/// with its `response` filled in.
pub struct SubmitPromptUseCase {
    chat_client: Arc<dyn ChatClient>,
    credentials: Arc<dyn CredentialProvider>,
}

impl SubmitPromptUseCase {
    pub fn new(chat_client: Arc<dyn ChatClient>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            chat_client,
            credentials,
        }
    }

    pub async fn execute(&self, submission: Submission) -> Result<Submission, DomainError> {
        submission.validate()?;

        let credential = self
            .credentials
            .credential()
            .ok_or_else(|| {
                warn!("Upstream API key is not set");
                DomainError::configuration("upstream API key is not set")
            })?;

        debug!(
            "Submitting prompt with {} past turns",
            submission.past_turns().len()
        );

        match self
            .chat_client
            .complete(submission.prompt(), &credential, submission.past_turns())
            .await
        {
            Ok(reply) => Ok(submission.with_response(reply)),
            Err(e) => {
                error!("submit error: {e}");
                Err(e)
            }
        }
    }
}
