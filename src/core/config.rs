use std::env;
use std::fmt;
use std::time::Duration;
use url::Url;

use super::{ReaderError, ReaderResult};

pub const DEFAULT_ENDPOINT: &str = "https://realtime.oxylabs.io/v1/queries";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(100);

pub const USERNAME_ENV: &str = "OXYLABS_USERNAME";
pub const PASSWORD_ENV: &str = "OXYLABS_PASSWORD";

/// Basic-auth credentials for the Oxylabs API.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reads `OXYLABS_USERNAME` and `OXYLABS_PASSWORD`.
    pub fn from_env() -> ReaderResult<Self> {
        let username = env::var(USERNAME_ENV)
            .map_err(|_| ReaderError::ConfigError(format!("{} is not set", USERNAME_ENV)))?;
        let password = env::var(PASSWORD_ENV)
            .map_err(|_| ReaderError::ConfigError(format!("{} is not set", PASSWORD_ENV)))?;

        Ok(Self::new(username, password))
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct ReaderConfig {
    pub endpoint: Url,
    pub timeout: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ReaderConfig {
    pub fn with_endpoint(mut self, endpoint: &str) -> ReaderResult<Self> {
        self.endpoint = Url::parse(endpoint)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReaderConfig::default();
        assert_eq!(config.endpoint.as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.timeout, Duration::from_secs(100));
    }

    #[test]
    fn test_config_overrides() {
        let config = ReaderConfig::default()
            .with_endpoint("http://127.0.0.1:8080/v1/queries")
            .unwrap()
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.endpoint.as_str(), "http://127.0.0.1:8080/v1/queries");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_endpoint() {
        let result = ReaderConfig::default().with_endpoint("not a url");
        assert!(matches!(result, Err(ReaderError::UrlError(_))));
    }

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("user", "hunter2");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }
}
