//! Coin sufficiency check.
//!
//! Coins are summed exactly in cents; the target is scaled to cents and
//! compared with a tolerance far below one cent, so `25 * 0.01` still
//! covers `0.25` while any shortfall, even a fraction of a cent, does not.

/// Slack for binary-float error when scaling `total` to cents.
const CENT_EPSILON: f64 = 1e-9;

/// Cent value of each coin, in the order quarters, dimes, nickels, pennies.
const COIN_CENTS: [u64; 4] = [25, 10, 5, 1];

/// Return `true` if the given coins add up to at least `total` dollars.
///
/// `changes` holds the count of quarters, dimes, nickels and pennies.
/// A negative or zero total is always covered; a NaN total never is.
///
/// # Examples
///
/// ```
/// use blogpad_core::change::is_change_enough;
///
/// assert!(is_change_enough([1, 0, 0, 0], 0.25));
/// assert!(!is_change_enough([0, 2, 0, 0], 0.25));
/// assert!(is_change_enough([0, 0, 0, 25], 0.25));
/// ```
pub fn is_change_enough(changes: [u32; 4], total: f64) -> bool {
    available_cents(changes) as f64 >= total * 100.0 - CENT_EPSILON
}

/// Sum of the coins in cents.
pub fn available_cents(changes: [u32; 4]) -> u64 {
    changes
        .iter()
        .zip(COIN_CENTS)
        .map(|(&count, cents)| u64::from(count) * cents)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_quarter_covers_quarter() {
        assert!(is_change_enough([1, 0, 0, 0], 0.25));
    }

    #[test]
    fn two_dimes_fall_short_of_quarter() {
        assert!(!is_change_enough([0, 2, 0, 0], 0.25));
    }

    #[test]
    fn pennies_sum_exactly() {
        assert!(is_change_enough([0, 0, 0, 25], 0.25));
    }

    #[test]
    fn mixed_coins() {
        // 0.50 + 0.30 + 0.05 + 0.02 = 0.87
        assert!(is_change_enough([2, 3, 1, 2], 0.87));
        assert!(!is_change_enough([2, 3, 1, 2], 0.88));
    }

    #[test]
    fn no_coins() {
        assert!(!is_change_enough([0, 0, 0, 0], 0.01));
        assert!(is_change_enough([0, 0, 0, 0], 0.0));
    }

    #[test]
    fn negative_total_is_always_covered() {
        assert!(is_change_enough([0, 0, 0, 0], -1.0));
    }

    #[test]
    fn sub_cent_shortfall_is_not_enough() {
        assert!(!is_change_enough([1, 0, 0, 0], 0.251));
        assert!(!is_change_enough([0, 0, 0, 0], 0.004));
        assert!(is_change_enough([1, 0, 0, 0], 0.249));
    }

    #[test]
    fn nan_total_is_never_covered() {
        assert!(!is_change_enough([0, 0, 0, 0], f64::NAN));
        assert!(!is_change_enough([100, 100, 100, 100], f64::NAN));
    }

    #[test]
    fn available_cents_weights_each_coin() {
        assert_eq!(available_cents([1, 1, 1, 1]), 41);
        assert_eq!(available_cents([4, 0, 0, 0]), 100);
    }
}
