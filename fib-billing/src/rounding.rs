//! Cent rounding for monetary output fields

/// Round to two decimal places, ties toward positive infinity
///
/// `-0.125` rounds to `-0.12` and `0.125` to `0.13`. NaN and infinities pass
/// through unchanged. Values whose cent count is already integral are left
/// alone, including magnitudes where `f64` can no longer hold half cents.
#[must_use]
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    let floor = scaled.floor();
    // Compare the fraction instead of adding 0.5, which can itself round up
    let rounded = if scaled - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < f64::EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_round_cents() {
        assert_close(round_cents(9.416_666), 9.42);
        assert_close(round_cents(5.833_333), 5.83);
        assert_close(round_cents(20.0), 20.0);
        assert_close(round_cents(0.0), 0.0);
    }

    #[test]
    fn test_ties_round_up() {
        assert_close(round_cents(0.125), 0.13);
        assert_close(round_cents(-0.125), -0.12);
        assert_close(round_cents(-2.5), -2.5);
    }

    #[test]
    fn test_just_below_half_cent_rounds_down() {
        // x * 100 is 0.49999999999999994, one ulp below the tie
        assert_close(round_cents(0.004_999_999_999_999_999), 0.0);
    }

    #[test]
    fn test_large_whole_cent_amounts_unchanged() {
        // 4503599627370497 cents sits between 2^52 and 2^53
        let amount = 45_035_996_273_704.97;
        assert_eq!(round_cents(amount), amount);
        assert_eq!(round_cents(-amount), -amount);
    }

    #[test]
    fn test_non_finite_passthrough() {
        assert!(round_cents(f64::NAN).is_nan());
        assert_eq!(round_cents(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_cents(f64::NEG_INFINITY), f64::NEG_INFINITY);
    }
}
