use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    #[error("Empty response: no choices returned by upstream")]
    EmptyResponse,

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Template error: {0}")]
    Template(String),
}

impl DomainError {
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    pub fn upstream_status(status: u16, body: impl Into<String>) -> Self {
        Self::UpstreamStatus {
            status,
            body: body.into(),
        }
    }

    pub fn deserialization(msg: impl Into<String>) -> Self {
        Self::Deserialization(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    /// True for every failure raised while building, sending or reading the
    /// upstream call. These collapse into one generic response for callers.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            Self::Serialization(_)
                | Self::Transport(_)
                | Self::UpstreamStatus { .. }
                | Self::EmptyResponse
                | Self::Deserialization(_)
        )
    }

    /// True when the submission was rejected before any upstream call.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::Validation(_))
    }

    /// HTTP status a caller should see for this error.
    pub fn status_code(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Terse message safe to return to callers. Never includes upstream detail.
    pub fn public_message(&self) -> &'static str {
        match self {
            Self::Decode(_) => "Bad Request",
            Self::Validation(_) => "Prompt is required",
            Self::Configuration(_) => "API key not found in environment variables",
            Self::Template(_) => "Internal Server Error",
            _ => "Error calling upstream API",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_failures_are_classified_together() {
        let upstream = [
            DomainError::serialization("x"),
            DomainError::transport("x"),
            DomainError::upstream_status(401, "bad key"),
            DomainError::EmptyResponse,
            DomainError::deserialization("x"),
        ];
        for err in &upstream {
            assert!(err.is_upstream_failure(), "{err} should be an upstream failure");
            assert_eq!(err.status_code(), 500);
            assert_eq!(err.public_message(), "Error calling upstream API");
        }
    }

    #[test]
    fn intake_errors_map_to_their_own_statuses() {
        assert_eq!(DomainError::decode("eof").status_code(), 400);
        assert_eq!(DomainError::validation("empty").status_code(), 400);
        assert_eq!(DomainError::configuration("missing").status_code(), 500);
        assert!(!DomainError::configuration("missing").is_upstream_failure());
    }

    #[test]
    fn public_message_hides_upstream_body() {
        let err = DomainError::upstream_status(401, r#"{"error":"invalid_api_key sk-123"}"#);
        assert!(err.to_string().contains("invalid_api_key"));
        assert!(!err.public_message().contains("invalid_api_key"));
    }
}
