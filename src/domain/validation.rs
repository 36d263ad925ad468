use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    MissingApiKey,
    EmptyBaseUrl,
    InvalidBaseUrl { input: String, reason: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "api_key is required"),
            Self::EmptyBaseUrl => write!(f, "base_url must not be empty"),
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base_url {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ConfigurationError {}
