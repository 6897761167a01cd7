//! Shared HTTP plumbing for every endpoint.
//!
//! One call is one round trip: resolve the URL, attach credentials, send,
//! read the whole body, then classify the status code.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode, Url, multipart::Form};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

use super::config::{Configuration, HttpClientConfig};
use super::constants;
use super::error::{ApiError, Credential, LlmError};

/// Body shape of a 401 response.
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: Option<ApiError>,
}

/// HTTP transport bound to one [`Configuration`].
pub struct HttpClient {
    client: reqwest::Client,
    configuration: Configuration,
}

impl HttpClient {
    /// Build a transport with its own `reqwest::Client`.
    pub fn new(configuration: Configuration, config: &HttpClientConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent())
            .build()
            .map_err(|e| {
                LlmError::ProviderConfiguration(format!("Failed to build reqwest client: {e}"))
            })?;

        Ok(Self::with_client(configuration, client))
    }

    /// Use a caller-supplied `reqwest::Client` as the transport.
    pub fn with_client(configuration: Configuration, client: reqwest::Client) -> Self {
        Self {
            client,
            configuration,
        }
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    /// Resolve an API path against the configured endpoint. The path replaces
    /// whatever path the endpoint carries.
    pub fn url(&self, path: &str) -> Result<Url, LlmError> {
        let endpoint = self.configuration.endpoint();
        let mut url = Url::parse(endpoint).map_err(|e| {
            LlmError::ProviderConfiguration(format!("Invalid endpoint '{endpoint}': {e}"))
        })?;
        url.set_path(path);
        Ok(url)
    }

    /// Bearer token and organization headers. Both credentials are required.
    pub fn auth_headers(&self) -> Result<HeaderMap, LlmError> {
        let api_key = self
            .configuration
            .api_key
            .as_deref()
            .ok_or(LlmError::MissingCredential(Credential::ApiKey))?;
        let organization = self
            .configuration
            .organization
            .as_deref()
            .ok_or(LlmError::MissingCredential(Credential::Organization))?;

        let mut bearer = HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|_| {
            LlmError::ProviderConfiguration("API key contains invalid header characters".into())
        })?;
        bearer.set_sensitive(true);

        let organization = HeaderValue::from_str(organization).map_err(|_| {
            LlmError::ProviderConfiguration(
                "Organization contains invalid header characters".into(),
            )
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(
            HeaderName::from_static(constants::ORGANIZATION_HEADER),
            organization,
        );
        Ok(headers)
    }

    pub async fn get<Res>(&self, path: &str) -> Result<Res, LlmError>
    where
        Res: DeserializeOwned,
    {
        let request = self.request(Method::GET, path)?;
        self.send(request).await
    }

    pub async fn post_json<Req, Res>(&self, path: &str, body: &Req) -> Result<Res, LlmError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.json(body);
        self.send(request).await
    }

    pub async fn post_multipart<Res>(&self, path: &str, form: Form) -> Result<Res, LlmError>
    where
        Res: DeserializeOwned,
    {
        let request = self.request(Method::POST, path)?.multipart(form);
        self.send(request).await
    }

    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, LlmError> {
        // Credentials first so a misconfigured client never builds a request.
        let headers = self.auth_headers()?;
        let url = self.url(path)?;
        Ok(self.client.request(method, url).headers(headers))
    }

    #[tracing::instrument(name = "http_request", skip(self, request), err)]
    async fn send<Res>(&self, request: reqwest::RequestBuilder) -> Result<Res, LlmError>
    where
        Res: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| LlmError::Network {
            message: "Failed to complete request".to_string(),
            source: e,
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| LlmError::Network {
            message: "Failed to read response body".to_string(),
            source: e,
        })?;

        if status.is_success() {
            debug!(status = %status, "HTTP request successful");
        } else {
            warn!(status = %status, "API returned error status");
        }

        decode_response(status, &body)
    }
}

/// Map a status code and fully read body onto a typed output or error.
pub(crate) fn decode_response<Res>(status: StatusCode, body: &str) -> Result<Res, LlmError>
where
    Res: DeserializeOwned,
{
    match status {
        StatusCode::OK => serde_json::from_str(body).map_err(|e| LlmError::Decode {
            message: "Failed to parse API response".to_string(),
            source: e,
        }),
        StatusCode::UNAUTHORIZED => {
            let error = if body.trim().is_empty() {
                None
            } else {
                match serde_json::from_str::<ErrorEnvelope>(body) {
                    Ok(envelope) => envelope.error,
                    Err(_) => Some(ApiError::from_raw_body(body)),
                }
            };
            Err(LlmError::Unauthorized { error })
        }
        StatusCode::BAD_GATEWAY => Err(LlmError::BadGateway {
            error: ApiError::from_raw_body(body),
        }),
        other => Err(LlmError::Unknown {
            status_code: other.as_u16(),
            error: ApiError::from_raw_body(body),
        }),
    }
}
