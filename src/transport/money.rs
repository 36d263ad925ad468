use std::str::FromStr;

use rust_decimal::Decimal;

/// Balance token returned after the `|` of a balance response.
///
/// Missing or blank input reads as `0`. Malformed numerals also degrade to `0`
/// instead of failing the whole response, which can hide corrupted gateway data.
///
/// Precision is bounded by [`Decimal`]: a 96-bit mantissa and at most 28
/// fractional digits. Longer fractions are rounded, and magnitudes outside that
/// range (`>= 2^96`, or scientific values like `1e-40`) read as `0`.
pub fn coerce_decimal(token: Option<&str>) -> Decimal {
    let trimmed = token.unwrap_or("0").trim();
    parse_decimal(trimmed).unwrap_or(Decimal::ZERO)
}

fn parse_decimal(token: &str) -> Option<Decimal> {
    if token.is_empty() {
        return None;
    }
    if let Ok(value) = Decimal::from_str(token) {
        return Some(value);
    }
    if token.contains(['e', 'E']) {
        return Decimal::from_scientific(token).ok();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn parses_plain_decimals_exactly() {
        assert_eq!(coerce_decimal(Some("100.50")), dec("100.50"));
        assert_eq!(coerce_decimal(Some(" 42 ")), dec("42"));
        assert_eq!(coerce_decimal(Some("-3.25")), dec("-3.25"));
    }

    #[test]
    fn parses_scientific_notation() {
        assert_eq!(coerce_decimal(Some("1e3")), dec("1000"));
        assert_eq!(coerce_decimal(Some("2.5E-1")), dec("0.25"));
    }

    #[test]
    fn values_outside_decimal_range_read_as_zero() {
        assert_eq!(coerce_decimal(Some("79228162514264337593543950336")), Decimal::ZERO);
        assert_eq!(coerce_decimal(Some("1e-40")), Decimal::ZERO);
    }

    #[test]
    fn missing_or_blank_is_zero() {
        assert_eq!(coerce_decimal(None), Decimal::ZERO);
        assert_eq!(coerce_decimal(Some("")), Decimal::ZERO);
        assert_eq!(coerce_decimal(Some("   ")), Decimal::ZERO);
    }

    #[test]
    fn malformed_numerals_degrade_to_zero() {
        assert_eq!(coerce_decimal(Some("not_a_number")), Decimal::ZERO);
        assert_eq!(coerce_decimal(Some("100.50abc")), Decimal::ZERO);
        assert_eq!(coerce_decimal(Some("e")), Decimal::ZERO);
        assert_eq!(
            coerce_decimal(Some("99999999999999999999999999999999999")),
            Decimal::ZERO
        );
    }
}
