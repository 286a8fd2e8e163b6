//! Tolerant three-way comparison.
//!
//! Every threshold test in the condition bank routes through `fuzzy_cmp`
//! instead of bare relational operators, so that values within `CMP_EPS` of a
//! threshold count as equal rather than tipping on rounding noise.
//!
//! Policy
//! - The tolerance is a fixed constant (no per-call knob); adjustments are
//!   rare and would go through a small config if ever needed.
//! - Behavior for NaN/∞ is undefined. `decide::evaluate` rejects non-finite
//!   inputs before any comparison runs.

use std::cmp::Ordering;

/// Absolute tolerance for threshold comparisons.
pub const CMP_EPS: f64 = 1e-6;

/// Three-way comparison with absolute tolerance: `Equal` when
/// `|a - b| < CMP_EPS`, otherwise `Less`/`Greater` by sign of `a - b`.
#[inline]
pub fn fuzzy_cmp(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < CMP_EPS {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// `a > b` outside the tolerance band.
#[inline]
pub fn fuzzy_gt(a: f64, b: f64) -> bool {
    fuzzy_cmp(a, b) == Ordering::Greater
}

/// `a < b` outside the tolerance band.
#[inline]
pub fn fuzzy_lt(a: f64, b: f64) -> bool {
    fuzzy_cmp(a, b) == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn band_counts_as_equal() {
        assert_eq!(fuzzy_cmp(1.0, 1.0 + CMP_EPS / 2.0), Ordering::Equal);
        assert_eq!(fuzzy_cmp(1.0, 1.0 - CMP_EPS / 2.0), Ordering::Equal);
        assert_eq!(fuzzy_cmp(0.0, 0.0), Ordering::Equal);
    }

    #[test]
    fn outside_band_orders_by_sign() {
        assert_eq!(fuzzy_cmp(1.0, 2.0), Ordering::Less);
        assert_eq!(fuzzy_cmp(2.0, 1.0), Ordering::Greater);
        assert_eq!(fuzzy_cmp(-1.0, 1.0), Ordering::Less);
    }

    proptest! {
        #[test]
        fn reflexive(a in -1e9f64..1e9) {
            prop_assert_eq!(fuzzy_cmp(a, a), Ordering::Equal);
        }

        #[test]
        fn antisymmetric_outside_band(a in -1e9f64..1e9, b in -1e9f64..1e9) {
            prop_assume!((a - b).abs() >= CMP_EPS);
            prop_assert_eq!(fuzzy_cmp(a, b), fuzzy_cmp(b, a).reverse());
        }

        #[test]
        fn within_band_is_equal(a in -1e6f64..1e6, d in -0.9e-6f64..0.9e-6) {
            prop_assert_eq!(fuzzy_cmp(a, a + d), Ordering::Equal);
        }
    }
}
