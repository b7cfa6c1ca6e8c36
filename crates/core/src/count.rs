//! Parsing of non-negative integer counts from user or file text.

use crate::error::{DomainError, DomainResult};

/// Parse a non-negative integer count (quantity, stock, reorder level).
///
/// Surrounding whitespace is ignored. Only ASCII digits are accepted, so
/// `"+5"`, `"1.0"` and `"1e3"` are rejected as non-integers, and `"-3"` is
/// rejected as negative.
pub fn parse_count(field: &str, text: &str) -> DomainResult<u64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(DomainError::validation(format!("{field} cannot be empty")));
    }

    if let Some(rest) = text.strip_prefix('-') {
        if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation(format!(
                "{field} must be non-negative (got {text})"
            )));
        }
    }

    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::validation(format!(
            "{field} must be an integer (got '{text}')"
        )));
    }

    text.parse::<u64>()
        .map_err(|_| DomainError::validation(format!("{field} is out of range (got {text})")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_plain_digits() {
        assert_eq!(parse_count("quantity", "10"), Ok(10));
        assert_eq!(parse_count("quantity", " 007 "), Ok(7));
        assert_eq!(parse_count("quantity", "0"), Ok(0));
    }

    #[test]
    fn rejects_negative_values() {
        let err = parse_count("quantity", "-3").unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("quantity must be non-negative (got -3)")
        );
    }

    #[test]
    fn rejects_non_integers() {
        for text in ["abc", "1.5", "+5", "1e3", "-", "--1", "12a"] {
            let err = parse_count("reorder level", text).unwrap_err();
            assert!(err.is_validation(), "{text} should be rejected");
        }
    }

    #[test]
    fn rejects_empty_text() {
        let err = parse_count("quantity", "   ").unwrap_err();
        assert_eq!(err, DomainError::validation("quantity cannot be empty"));
    }

    #[test]
    fn rejects_overflow() {
        let err = parse_count("quantity", "99999999999999999999999").unwrap_err();
        assert!(err.is_validation());
    }

    proptest! {
        #[test]
        fn any_u64_round_trips_through_text(n in any::<u64>()) {
            prop_assert_eq!(parse_count("quantity", &n.to_string()), Ok(n));
        }
    }
}
