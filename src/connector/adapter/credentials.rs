use crate::application::CredentialProvider;

use super::API_KEY_ENV;

/// Reads the upstream key from the process environment on every call, so a
/// key exported after startup (or removed) takes effect immediately.
pub struct EnvCredentialProvider {
    var: String,
}

impl EnvCredentialProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentialProvider {
    fn default() -> Self {
        Self::new(API_KEY_ENV)
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn credential(&self) -> Option<String> {
        std::env::var(&self.var).ok().filter(|key| !key.is_empty())
    }
}

/// Fixed credential, for tests and embedding.
pub struct StaticCredentialProvider {
    key: Option<String>,
}

impl StaticCredentialProvider {
    pub fn new(key: Option<&str>) -> Self {
        Self {
            key: key.map(str::to_string),
        }
    }
}

impl CredentialProvider for StaticCredentialProvider {
    fn credential(&self) -> Option<String> {
        self.key.clone().filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_provider_treats_unset_variable_as_missing() {
        let provider = EnvCredentialProvider::new("CHAT_RELAY_TEST_KEY_THAT_IS_NEVER_SET");
        assert_eq!(provider.credential(), None);
    }

    #[test]
    fn static_provider_treats_empty_key_as_missing() {
        assert_eq!(StaticCredentialProvider::new(Some("")).credential(), None);
        assert_eq!(
            StaticCredentialProvider::new(Some("sk-1")).credential().as_deref(),
            Some("sk-1")
        );
    }
}
