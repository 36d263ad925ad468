use crate::domain::{Outcome, Payload, StatusCode};

use super::money::coerce_decimal;

pub const CHECK_BALANCE_PATH: &str = "/message-via-url/check/balance";

/// Message used for every non-success balance response without a documented code.
///
/// Unlike the campaign endpoint this never echoes the unknown code; existing
/// callers match on this exact text.
pub const UNKNOWN_BALANCE_RESPONSE: &str = "Unknown response or error";

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("response body is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Decode a `<code>|<balance>` body.
///
/// Never fails: internal decode faults become an `exception` outcome carrying
/// the fault description and no raw body.
pub fn decode_check_balance_response(body: &[u8]) -> Outcome {
    match try_decode_check_balance(body) {
        Ok(outcome) => outcome,
        Err(err) => {
            tracing::warn!(error = %err, "balance response could not be decoded");
            Outcome {
                code: StatusCode::exception(),
                ok: false,
                message: err.to_string(),
                raw: None,
                payload: None,
            }
        }
    }
}

fn try_decode_check_balance(body: &[u8]) -> Result<Outcome, TransportError> {
    let raw = std::str::from_utf8(body)?;
    let (status, balance) = match raw.trim().split_once('|') {
        Some((status, balance)) => (status, Some(balance)),
        None => (raw.trim(), None),
    };
    let status = status.trim();

    if status.is_empty() {
        return Ok(Outcome {
            code: StatusCode::parse_error(),
            ok: false,
            message: UNKNOWN_BALANCE_RESPONSE.to_owned(),
            raw: Some(raw.to_owned()),
            payload: None,
        });
    }

    let code = StatusCode::new(status);
    if code.is_success() {
        return Ok(Outcome {
            code,
            ok: true,
            message: "Success".to_owned(),
            raw: Some(raw.to_owned()),
            payload: Some(Payload::Balance(coerce_decimal(balance))),
        });
    }

    let message = code
        .known()
        .map_or(UNKNOWN_BALANCE_RESPONSE, |known| known.message())
        .to_owned();
    Ok(Outcome {
        code,
        ok: false,
        message,
        raw: Some(raw.to_owned()),
        payload: None,
    })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn decode_success_with_exact_decimal_balance() {
        let outcome = decode_check_balance_response(b"1|100.50");
        assert_eq!(outcome.code.as_str(), "1");
        assert!(outcome.ok);
        assert_eq!(outcome.message, "Success");
        assert_eq!(outcome.raw.as_deref(), Some("1|100.50"));
        assert_eq!(outcome.balance(), Some(Decimal::from_str("100.50").unwrap()));
    }

    #[test]
    fn decode_success_with_malformed_balance_degrades_to_zero() {
        let outcome = decode_check_balance_response(b"1|not_a_number");
        assert!(outcome.ok);
        assert_eq!(outcome.balance(), Some(Decimal::ZERO));
    }

    #[test]
    fn decode_success_without_balance_part_is_zero() {
        let outcome = decode_check_balance_response(b"1");
        assert!(outcome.ok);
        assert_eq!(outcome.balance(), Some(Decimal::ZERO));
    }

    #[test]
    fn decode_splits_on_first_delimiter_only() {
        let outcome = decode_check_balance_response(b" 1 | 12.5|extra \n");
        assert!(outcome.ok);
        assert_eq!(outcome.balance(), Some(Decimal::ZERO));

        let outcome = decode_check_balance_response(b" 1 | 12.5 \n");
        assert_eq!(outcome.balance(), Some(Decimal::from_str("12.5").unwrap()));
    }

    #[test]
    fn decode_known_failure_code() {
        let outcome = decode_check_balance_response(b"2008");
        assert_eq!(outcome.code.as_str(), "2008");
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Insufficient balance or package quota");
        assert_eq!(outcome.payload, None);
    }

    #[test]
    fn decode_unknown_code_does_not_echo_code() {
        let outcome = decode_check_balance_response(b"9999|1.00");
        assert_eq!(outcome.code.as_str(), "9999");
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Unknown response or error");
        assert_eq!(outcome.payload, None);
    }

    #[test]
    fn decode_empty_body_is_parse_error() {
        let outcome = decode_check_balance_response(b"");
        assert_eq!(outcome.code.as_str(), "parse_error");
        assert!(!outcome.ok);
        assert_eq!(outcome.message, "Unknown response or error");
        assert_eq!(outcome.raw.as_deref(), Some(""));
        assert_eq!(outcome.payload, None);
    }

    #[test]
    fn decode_empty_status_before_delimiter_is_parse_error() {
        let outcome = decode_check_balance_response(b"  |100.50");
        assert_eq!(outcome.code.as_str(), "parse_error");
        assert_eq!(outcome.raw.as_deref(), Some("  |100.50"));
    }

    #[test]
    fn decode_fault_becomes_exception_outcome() {
        let outcome = decode_check_balance_response(&[b'1', b'|', 0xff, 0xfe]);
        assert_eq!(outcome.code.as_str(), "exception");
        assert!(!outcome.ok);
        assert!(outcome.message.starts_with("response body is not valid UTF-8"));
        assert_eq!(outcome.raw, None);
        assert_eq!(outcome.payload, None);
    }
}
