//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::{ApiKey, BaseUrl, ConfigurationError, Outcome, SendMessage};
use crate::transport::{
    CHECK_BALANCE_PATH, SEND_MESSAGE_PATH, decode_check_balance_response,
    decode_send_message_response, encode_send_message_query,
};

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let url = url::Url::parse_with_params(url, &params)?;
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(reqwest::Error::without_url)?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(reqwest::Error::without_url)?
                .to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Gateway credentials: the `esmsqk` key and the API base URL.
///
/// Immutable once built; every client call reuses the same values.
pub struct Credentials {
    api_key: ApiKey,
    base_url: BaseUrl,
}

impl Credentials {
    /// Validate `api_key` and `base_url`; one trailing `/` is stripped from the URL.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            base_url: BaseUrl::new(base_url)?,
        })
    }

    /// Credentials for the production endpoint ([`BaseUrl::DEFAULT`]).
    pub fn with_default_base_url(api_key: impl Into<String>) -> Result<Self, ConfigurationError> {
        Ok(Self {
            api_key: ApiKey::new(api_key)?,
            base_url: BaseUrl::default(),
        })
    }

    /// Read `DIALOG_LK_ESMS_API_KEY` (required) and `DIALOG_LK_ESMS_BASE_URL` (optional).
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigurationError> {
        let api_key = ApiKey::from_option(lookup(ApiKey::ENV_VAR))?;
        let base_url = match lookup(BaseUrl::ENV_VAR) {
            Some(value) => BaseUrl::new(value)?,
            None => BaseUrl::default(),
        };
        Ok(Self { api_key, base_url })
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    fn push_query_params(&self, params: &mut Vec<(String, String)>) {
        params.push((ApiKey::FIELD.to_owned(), self.api_key.as_str().to_owned()));
    }
}

#[derive(Debug, thiserror::Error)]
/// Failure to complete the HTTP exchange; no status code exists to classify it.
pub enum TransportFailure {
    /// HTTP client / network failure (DNS, TLS, connect, timeouts, body read).
    #[error("transport error: {0}")]
    Network(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code returned by the server.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`EsmsClient`].
///
/// - [`EsmsError::Transport`]: the HTTP exchange itself failed,
/// - [`EsmsError::Rejected`]: the gateway answered but did not report success;
///   the decoded [`Outcome`] is kept for inspection,
/// - [`EsmsError::Configuration`]: invalid settings passed to the builder.
pub enum EsmsError {
    #[error(transparent)]
    Transport(#[from] TransportFailure),

    #[error("gateway rejected request with code {}: {}", .0.code, .0.message)]
    Rejected(Outcome),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),
}

impl EsmsError {
    /// The gateway outcome, when the failure came from a decoded response.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Self::Rejected(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn into_outcome(self) -> Option<Outcome> {
        match self {
            Self::Rejected(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

#[derive(Debug, Clone)]
/// Builder for [`EsmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent.
pub struct EsmsClientBuilder {
    credentials: Credentials,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl EsmsClientBuilder {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            base_url: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Override the base URL carried by the credentials. Validated in [`Self::build`].
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    ///
    /// An elapsed timeout is reported as [`TransportFailure::Network`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<EsmsClient, EsmsError> {
        let mut credentials = self.credentials;
        if let Some(base_url) = self.base_url {
            credentials.base_url = BaseUrl::new(base_url)?;
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| TransportFailure::Network(Box::new(err)))?;

        Ok(EsmsClient {
            credentials,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level Dialog e-SMS client.
///
/// Holds immutable [`Credentials`] and is safe to share between tasks. Each
/// call performs exactly one GET request; nothing is retried.
pub struct EsmsClient {
    credentials: Credentials,
    http: Arc<dyn HttpTransport>,
}

impl EsmsClient {
    /// Create a client with a default HTTP client.
    ///
    /// For more customization, use [`EsmsClient::builder`].
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    pub fn builder(credentials: Credentials) -> EsmsClientBuilder {
        EsmsClientBuilder::new(credentials)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Submit a bulk campaign via `message-via-url/create/url-campaign`.
    ///
    /// Errors:
    /// - [`EsmsError::Transport`] for network failures and non-2xx responses,
    /// - [`EsmsError::Rejected`] when the returned code is anything but `"1"`.
    pub async fn send_message(&self, request: SendMessage) -> Result<Outcome, EsmsError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_query_params(&mut params);
        params.extend(encode_send_message_query(&request));

        tracing::debug!(
            path = SEND_MESSAGE_PATH,
            recipients = request.numbers().len(),
            "submitting url campaign"
        );
        let body = self.get(SEND_MESSAGE_PATH, params).await?;
        into_result(decode_send_message_response(&body))
    }

    /// Query the account balance via `message-via-url/check/balance`.
    ///
    /// On success the outcome carries the balance ([`Outcome::balance`]).
    ///
    /// Errors:
    /// - [`EsmsError::Transport`] for network failures and non-2xx responses,
    /// - [`EsmsError::Rejected`] for non-success codes, an empty status
    ///   (`parse_error`) or an undecodable body (`exception`).
    pub async fn check_balance(&self) -> Result<Outcome, EsmsError> {
        let mut params = Vec::<(String, String)>::new();
        self.credentials.push_query_params(&mut params);

        tracing::debug!(path = CHECK_BALANCE_PATH, "checking balance");
        let body = self.get(CHECK_BALANCE_PATH, params).await?;
        into_result(decode_check_balance_response(&body))
    }

    async fn get(
        &self,
        path: &str,
        params: Vec<(String, String)>,
    ) -> Result<Vec<u8>, TransportFailure> {
        let url = self.credentials.base_url.join(path);
        let response = self.http.get(&url, params).await.map_err(|err| {
            tracing::warn!(path, error = %err, "gateway request failed");
            TransportFailure::Network(err)
        })?;

        if !(200..=299).contains(&response.status) {
            tracing::warn!(
                path,
                status = response.status,
                "gateway returned non-success HTTP status"
            );
            let body = String::from_utf8_lossy(&response.body).into_owned();
            let body = if body.trim().is_empty() {
                None
            } else {
                Some(body)
            };
            return Err(TransportFailure::HttpStatus {
                status: response.status,
                body,
            });
        }

        Ok(response.body)
    }
}

fn into_result(outcome: Outcome) -> Result<Outcome, EsmsError> {
    tracing::debug!(code = %outcome.code, ok = outcome.ok, "gateway response decoded");
    if outcome.ok {
        Ok(outcome)
    } else {
        Err(EsmsError::Rejected(outcome))
    }
}
