use super::ast::{Symbol, Value};

/// Classifies a single atom token as an integer, a float or a symbol
///
/// Interpretations are tried in order: an integer literal (optional sign,
/// digits only, fits in `i64`), then anything `f64` accepts (decimal,
/// exponent, `inf`, `nan`), then a symbol holding the text verbatim.
/// A malformed number is never an error; `1.2.3` is just a symbol.
pub fn classify_atom(token: &str) -> Value {
    if let Ok(n) = token.parse::<i64>() {
        return Value::Int(n);
    }

    if let Ok(f) = token.parse::<f64>() {
        return Value::Float(f);
    }

    Value::Symbol(Symbol::new(token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers() {
        assert_eq!(classify_atom("3"), Value::Int(3));
        assert_eq!(classify_atom("-3"), Value::Int(-3));
        assert_eq!(classify_atom("+42"), Value::Int(42));
        assert_eq!(classify_atom("007"), Value::Int(7));
    }

    #[test]
    fn test_floats() {
        assert_eq!(classify_atom("3.0"), Value::Float(3.0));
        assert_eq!(classify_atom("-0.5"), Value::Float(-0.5));
        assert_eq!(classify_atom("1e3"), Value::Float(1000.0));
        assert_eq!(classify_atom("2.5E-1"), Value::Float(0.25));
        assert_eq!(classify_atom("inf"), Value::Float(f64::INFINITY));
    }

    #[test]
    fn test_integer_overflow_falls_through_to_float() {
        assert_eq!(
            classify_atom("99999999999999999999"),
            Value::Float(99999999999999999999.0)
        );
    }

    #[test]
    fn test_symbols() {
        assert_eq!(classify_atom("abc"), Value::symbol("abc"));
        assert_eq!(classify_atom("+"), Value::symbol("+"));
        assert_eq!(classify_atom("-"), Value::symbol("-"));
        assert_eq!(classify_atom("1.2.3"), Value::symbol("1.2.3"));
        assert_eq!(classify_atom("12abc"), Value::symbol("12abc"));
        assert_eq!(classify_atom("set!"), Value::symbol("set!"));
    }

    #[test]
    fn test_non_ascii_digits_are_symbols() {
        assert_eq!(classify_atom("\u{661}\u{662}"), Value::symbol("\u{661}\u{662}"));
        assert_eq!(classify_atom("\u{ff13}"), Value::symbol("\u{ff13}"));
    }

    #[test]
    fn test_reclassifying_canonical_form() {
        for value in [Value::Int(-17), Value::Float(3.0), Value::symbol("car")] {
            assert_eq!(classify_atom(&value.to_string()), value);
        }
    }
}
