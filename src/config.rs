// src/config.rs

use std::env;
use std::time::Duration;

use crate::client::AnalyzeError;

/// Environment variable consulted when no subscription key is passed.
pub const SUBSCRIPTION_KEY_VAR: &str = "TEXT_ANALYTICS_SUBSCRIPTION_KEY";

/// Environment variable consulted when no resource name is passed.
pub const ENDPOINT_VAR: &str = "TEXT_ANALYTICS_ENDPOINT";

/// Timeout applied to the whole round trip of every request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

/// Resolved credentials for one client. Environment fallback happens in
/// [`ClientConfig::resolve`], once, at construction time; calls made through
/// the client never re-read the environment.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub subscription_key: String,
    pub resource_name: String,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(subscription_key: impl Into<String>, resource_name: impl Into<String>) -> Self {
        Self {
            subscription_key: subscription_key.into(),
            resource_name: resource_name.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the effective subscription key and resource name. Values passed
    /// as empty strings fall back to the environment; anything still empty
    /// after fallback is a [`AnalyzeError::MissingCredential`] or
    /// [`AnalyzeError::MissingEndpoint`] error.
    pub fn resolve(subscription_key: &str, resource_name: &str) -> Result<Self, AnalyzeError> {
        let key = non_empty(subscription_key)
            .or_else(|| env_non_empty(SUBSCRIPTION_KEY_VAR))
            .ok_or(AnalyzeError::MissingCredential)?;
        let resource = non_empty(resource_name)
            .or_else(|| env_non_empty(ENDPOINT_VAR))
            .ok_or(AnalyzeError::MissingEndpoint)?;
        Ok(Self::new(key, resource))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn env_non_empty(var: &str) -> Option<String> {
    env::var(var).ok().filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // The environment is process-global; tests that touch it take this lock.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn explicit_values_win() {
        let config = ClientConfig::resolve("key", "my-resource").unwrap();
        assert_eq!(config.subscription_key, "key");
        assert_eq!(config.resource_name, "my-resource");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn empty_arguments_fall_back_to_the_environment() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var(SUBSCRIPTION_KEY_VAR, "env-key");
        env::set_var(ENDPOINT_VAR, "env-resource");

        let config = ClientConfig::resolve("", "").unwrap();
        assert_eq!(config.subscription_key, "env-key");
        assert_eq!(config.resource_name, "env-resource");

        env::remove_var(SUBSCRIPTION_KEY_VAR);
        env::remove_var(ENDPOINT_VAR);
    }

    #[test]
    fn missing_values_produce_distinct_errors() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var(SUBSCRIPTION_KEY_VAR);
        env::remove_var(ENDPOINT_VAR);

        assert!(matches!(
            ClientConfig::resolve("", "my-resource"),
            Err(AnalyzeError::MissingCredential)
        ));
        assert!(matches!(
            ClientConfig::resolve("key", ""),
            Err(AnalyzeError::MissingEndpoint)
        ));
        // Credential is checked first when both are missing.
        assert!(matches!(
            ClientConfig::resolve("", ""),
            Err(AnalyzeError::MissingCredential)
        ));
    }
}
