//! Truncating rounding of areas to two decimals.

use crate::cfg::AREA_SCALE;

/// Truncate `area` to two decimal places: `floor(area * 100) / 100`.
///
/// Pre: `area` is finite and non-negative.
/// Post: `0 <= area - rounded_area(area) < 0.01` (up to float representation).
///
/// This is truncation, not round-half-up: `1.239` becomes `1.23`.
/// NaN and infinities are passed through `floor` unchanged; the result for
/// such inputs is unspecified.
#[inline]
pub fn rounded_area(area: f64) -> f64 {
    (area * AREA_SCALE).floor() / AREA_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_instead_of_rounding() {
        assert_eq!(rounded_area(1.239), 1.23);
        assert_eq!(rounded_area(1.23999), 1.23);
        assert_eq!(rounded_area(0.009), 0.0);
    }

    #[test]
    fn whole_and_two_decimal_values_are_stable() {
        assert_eq!(rounded_area(6.0), 6.0);
        assert_eq!(rounded_area(21.0), 21.0);
        assert_eq!(rounded_area(12.5), 12.5);
        assert_eq!(rounded_area(0.0), 0.0);
    }

    #[test]
    fn binary_imprecision_is_not_corrected() {
        // 0.1 + 0.2 = 0.30000000000000004 -> 30.000000000000004 -> 0.3
        assert_eq!(rounded_area(0.1 + 0.2), 0.3);
        // 1.005 is stored slightly below 1.005, so * 100 lands under 100.5.
        assert_eq!(rounded_area(1.005), 1.0);
    }
}
