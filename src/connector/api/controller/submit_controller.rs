use tracing::debug;

use crate::domain::{DomainError, Submission};

use super::super::Container;

pub struct SubmitController<'a> {
    container: &'a Container,
}

impl<'a> SubmitController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    /// Decode a raw `/submit` body and return it with `response` populated.
    pub async fn submit(&self, raw_body: &[u8]) -> Result<Submission, DomainError> {
        let submission = Submission::from_slice(raw_body).inspect_err(|e| {
            debug!("Rejecting submission: {e}");
        })?;

        self.container.submit_use_case().execute(submission).await
    }
}
