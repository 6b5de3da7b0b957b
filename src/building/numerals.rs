//! Numeric literal coercion
//!
//! The lexer keeps numbers as text. Each field picks one of these functions: datum types are
//! integers, PARAMETER values are integers when the literal is integral and floats otherwise, and
//! everything else is a float.

use crate::ast::ParameterValue;
use crate::error::ContentError;

pub fn parse_int(field: &'static str, text: &str) -> Result<i64, ContentError> {
    text.parse::<i64>().map_err(|_| invalid(field, text))
}

pub fn parse_float(field: &'static str, text: &str) -> Result<f64, ContentError> {
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid(field, text)),
    }
}

/// Integer when the literal has no fractional part, float otherwise.
///
/// `400000` stays an integer, `49.0` stays a float. Integers that overflow `i64` fall back to a
/// float.
pub fn parse_int_else_float(field: &'static str, text: &str) -> Result<ParameterValue, ContentError> {
    match parse_int(field, text) {
        Ok(value) => Ok(ParameterValue::Integer(value)),
        Err(_) => parse_float(field, text).map(ParameterValue::Float),
    }
}

fn invalid(field: &'static str, text: &str) -> ContentError {
    ContentError::InvalidNumber {
        field,
        text: text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2005", 2005)]
    #[case("+7", 7)]
    #[case("-3", -3)]
    #[case("007", 7)]
    fn test_parse_int(#[case] text: &str, #[case] expected: i64) {
        assert_eq!(parse_int("datum type", text), Ok(expected));
    }

    #[rstest]
    #[case("2005.0")]
    #[case("1.5")]
    #[case(".5")]
    fn test_parse_int_rejects_decimals(#[case] text: &str) {
        assert_eq!(
            parse_int("datum type", text),
            Err(ContentError::InvalidNumber {
                field: "datum type",
                text: text.to_string(),
            })
        );
    }

    #[rstest]
    #[case("6377563.396", 6377563.396)]
    #[case("0", 0.0)]
    #[case("-111", -111.0)]
    #[case("5.", 5.0)]
    #[case(".25", 0.25)]
    fn test_parse_float(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_float("longitude", text), Ok(expected));
    }

    #[rstest]
    #[case("400000", ParameterValue::Integer(400000))]
    #[case("-100000", ParameterValue::Integer(-100000))]
    #[case("49.0", ParameterValue::Float(49.0))]
    #[case("0.9996012717", ParameterValue::Float(0.9996012717))]
    #[case("99999999999999999999", ParameterValue::Float(1e20))]
    fn test_parse_int_else_float(#[case] text: &str, #[case] expected: ParameterValue) {
        assert_eq!(parse_int_else_float("parameter", text), Ok(expected));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_float("longitude", "abc").is_err());
        assert!(parse_int_else_float("parameter", "").is_err());
    }
}
