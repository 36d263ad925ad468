use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::value::StatusCode;

/// Operation-specific data decoded from a successful response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Payload {
    Balance(Decimal),
}

/// Interpretation of one gateway response.
///
/// Both accepted and rejected requests produce an `Outcome`; `ok` is `true`
/// only when `code` is `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub code: StatusCode,
    pub ok: bool,
    pub message: String,
    /// Unparsed response body; `None` when no body could be interpreted.
    pub raw: Option<String>,
    pub payload: Option<Payload>,
}

impl Outcome {
    /// Account balance, present on successful balance checks.
    pub fn balance(&self) -> Option<Decimal> {
        match self.payload {
            Some(Payload::Balance(balance)) => Some(balance),
            None => None,
        }
    }
}
