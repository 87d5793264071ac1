//! Form-input validation predicates.
//!
//! Raw form fields arrive as strings. [`coerce`] turns each one into an
//! `f64` (NaN when the text is not numeric), and the two predicates below
//! gate record construction. Both fail closed: one bad value rejects the
//! whole batch, and the caller learns only that *some* value was bad.

/// Coerce a raw form field to a number.
///
/// Non-numeric text becomes NaN so that [`all_finite`] rejects it; this
/// makes the loose string-to-number coercion of the form layer explicit.
pub fn coerce(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// True iff every value is a finite number (no NaN, no ±infinity)
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True iff every value is strictly greater than zero
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_positive_triple_passes_both() {
        let values = [5.0, 25.0, 180.0];
        assert!(all_finite(&values));
        assert!(all_positive(&values));
    }

    #[test]
    fn test_nan_rejected_by_all_finite() {
        assert!(!all_finite(&[5.0, f64::NAN, 180.0]));
    }

    #[test]
    fn test_infinity_rejected_by_all_finite() {
        assert!(!all_finite(&[f64::INFINITY, 25.0]));
        assert!(!all_finite(&[f64::NEG_INFINITY]));
    }

    #[test]
    fn test_non_numeric_string_coerces_to_nan() {
        assert!(coerce("abc").is_nan());
        assert!(coerce("").is_nan());
        assert!(coerce("12km").is_nan());
    }

    #[test]
    fn test_numeric_string_coerces() {
        assert_eq!(coerce("5"), 5.0);
        assert_eq!(coerce(" 2.5 "), 2.5);
        assert_eq!(coerce("-12"), -12.0);
    }

    #[test]
    fn test_zero_and_negative_rejected_by_all_positive() {
        assert!(!all_positive(&[5.0, 0.0]));
        assert!(!all_positive(&[-1.0, 25.0]));
    }

    #[test]
    fn test_negative_values_still_finite() {
        // Positivity and finiteness are independent checks
        assert!(all_finite(&[-5.0, 10.0]));
        assert!(!all_positive(&[-5.0, 10.0]));
    }

    #[test]
    fn test_empty_batch_passes() {
        assert!(all_finite(&[]));
        assert!(all_positive(&[]));
    }
}
