/// Source of the upstream API key, consulted once per request.
pub trait CredentialProvider: Send + Sync {
    /// The credential, or `None` when it is absent or empty.
    fn credential(&self) -> Option<String>;
}
