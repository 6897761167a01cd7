use std::time::Duration;

use super::constants;

/// Connection settings for the API.
///
/// Every field is optional. A missing endpoint falls back to the public host;
/// a missing API key or organization only fails once a call is made.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub organization: Option<String>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `OPENAI_API_KEY`, `OPENAI_ORGANIZATION` and `OPENAI_BASE_URL`.
    /// Unset or empty variables leave the field empty.
    pub fn from_env() -> Self {
        Self {
            endpoint: read_env(constants::BASE_URL_ENV_VAR),
            api_key: read_env(constants::API_KEY_ENV_VAR),
            organization: read_env(constants::ORGANIZATION_ENV_VAR),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// The configured endpoint, or the public API host.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(constants::API_BASE)
    }
}

fn read_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Settings for the underlying HTTP transport
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Total time allowed for the single request an operation makes
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            user_agent: None,
        }
    }
}

impl HttpClientConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub(crate) fn user_agent(&self) -> String {
        self.user_agent
            .clone()
            .unwrap_or_else(|| format!("oaiv1/{}", env!("CARGO_PKG_VERSION")))
    }
}
