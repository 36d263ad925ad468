use serde::Serialize;

use crate::domain::validation::ConfigurationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// Dialog e-SMS API key (`esmsqk`).
///
/// Invariant: non-empty after trimming. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by the gateway (`esmsqk`).
    pub const FIELD: &'static str = "esmsqk";

    /// Environment variable consulted by [`crate::Credentials::from_env`].
    pub const ENV_VAR: &'static str = "DIALOG_LK_ESMS_API_KEY";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::MissingApiKey);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Create an [`ApiKey`] from an optional value; `None` is treated like an empty key.
    pub fn from_option(value: Option<impl Into<String>>) -> Result<Self, ConfigurationError> {
        match value {
            Some(value) => Self::new(value),
            None => Err(ConfigurationError::MissingApiKey),
        }
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Base URL of the gateway API, e.g. `https://e-sms.dialog.lk/api/v1`.
///
/// Invariant: an absolute URL, trimmed, with exactly one trailing `/` removed,
/// so `https://x/api/v1/` and `https://x/api/v1` are the same value.
pub struct BaseUrl(String);

impl BaseUrl {
    /// Production endpoint.
    pub const DEFAULT: &'static str = "https://e-sms.dialog.lk/api/v1";

    /// Environment variable consulted by [`crate::Credentials::from_env`].
    pub const ENV_VAR: &'static str = "DIALOG_LK_ESMS_BASE_URL";

    /// Create a validated, normalized [`BaseUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::EmptyBaseUrl);
        }

        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let parsed =
            url::Url::parse(normalized).map_err(|err| ConfigurationError::InvalidBaseUrl {
                input: value.clone(),
                reason: err.to_string(),
            })?;
        if parsed.cannot_be_a_base() {
            return Err(ConfigurationError::InvalidBaseUrl {
                input: value.clone(),
                reason: "URL cannot be used as a base".to_owned(),
            });
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Borrow the normalized URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join an endpoint path (with or without a leading `/`) onto this base.
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.0, path.trim_start_matches('/'))
    }
}

impl Default for BaseUrl {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
/// Status code token returned by the gateway.
///
/// This value is preserved as-is even when unknown to this crate; unknown codes
/// are valid, just unrecognized.
pub struct StatusCode(String);

impl StatusCode {
    const SUCCESS: &'static str = "1";
    const PARSE_ERROR: &'static str = "parse_error";
    const EXCEPTION: &'static str = "exception";

    /// Wrap a raw status token.
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Code assigned when a balance response carries no status token at all.
    pub fn parse_error() -> Self {
        Self::new(Self::PARSE_ERROR)
    }

    /// Code assigned when the balance decoder hits an internal fault.
    pub fn exception() -> Self {
        Self::new(Self::EXCEPTION)
    }

    /// Borrow the token as returned by the gateway.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a documented variant, if one exists.
    pub fn known(&self) -> Option<KnownStatusCode> {
        KnownStatusCode::from_code(&self.0)
    }

    /// `true` only for the gateway's success token `"1"`.
    pub fn is_success(&self) -> bool {
        self.0 == Self::SUCCESS
    }

    /// `true` when the gateway rejected the `esmsqk` key.
    pub fn is_auth_error(&self) -> bool {
        self.known() == Some(KnownStatusCode::InvalidKey)
    }

    /// `true` when the account has run out of balance or package quota.
    pub fn is_insufficient_balance(&self) -> bool {
        self.known() == Some(KnownStatusCode::InsufficientBalance)
    }
}

impl std::fmt::Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Status codes documented by the gateway.
///
/// Unknown codes are preserved as [`StatusCode`] and return `None` from
/// [`KnownStatusCode::from_code`].
pub enum KnownStatusCode {
    Success,
    CampaignCreationFailed,
    BadRequest,
    EmptyNumberList,
    EmptyMessageBody,
    InvalidNumberListFormat,
    GetRequestsNotAllowed,
    InvalidKey,
    InsufficientBalance,
    NoValidNumbers,
    PackagingNotAllowed,
    TransactionalError,
}

impl KnownStatusCode {
    pub const ALL: [Self; 12] = [
        Self::Success,
        Self::CampaignCreationFailed,
        Self::BadRequest,
        Self::EmptyNumberList,
        Self::EmptyMessageBody,
        Self::InvalidNumberListFormat,
        Self::GetRequestsNotAllowed,
        Self::InvalidKey,
        Self::InsufficientBalance,
        Self::NoValidNumbers,
        Self::PackagingNotAllowed,
        Self::TransactionalError,
    ];

    /// Convert a raw status token into a known variant. The token must already be trimmed.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "1" => Self::Success,
            "2001" => Self::CampaignCreationFailed,
            "2002" => Self::BadRequest,
            "2003" => Self::EmptyNumberList,
            "2004" => Self::EmptyMessageBody,
            "2005" => Self::InvalidNumberListFormat,
            "2006" => Self::GetRequestsNotAllowed,
            "2007" => Self::InvalidKey,
            "2008" => Self::InsufficientBalance,
            "2009" => Self::NoValidNumbers,
            "2010" => Self::PackagingNotAllowed,
            "2011" => Self::TransactionalError,
            _ => return None,
        })
    }

    /// The wire token for this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "1",
            Self::CampaignCreationFailed => "2001",
            Self::BadRequest => "2002",
            Self::EmptyNumberList => "2003",
            Self::EmptyMessageBody => "2004",
            Self::InvalidNumberListFormat => "2005",
            Self::GetRequestsNotAllowed => "2006",
            Self::InvalidKey => "2007",
            Self::InsufficientBalance => "2008",
            Self::NoValidNumbers => "2009",
            Self::PackagingNotAllowed => "2010",
            Self::TransactionalError => "2011",
        }
    }

    /// Human-readable message published by the gateway for this code.
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::CampaignCreationFailed => "Error occurred during campaign creation",
            Self::BadRequest => "Bad request",
            Self::EmptyNumberList => "Empty number list",
            Self::EmptyMessageBody => "Empty message body",
            Self::InvalidNumberListFormat => "Invalid number list format",
            Self::GetRequestsNotAllowed => "Not eligible to send messages via GET requests",
            Self::InvalidKey => "Invalid key (esmsqk parameter is invalid)",
            Self::InsufficientBalance => "Insufficient balance or package quota",
            Self::NoValidNumbers => "No valid numbers after mask-block removal",
            Self::PackagingNotAllowed => "Not eligible to consume packaging",
            Self::TransactionalError => "Transactional error",
        }
    }
}
