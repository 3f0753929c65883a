//! Money calculation utilities using rust_decimal for precision
//!
//! Prices travel as `Decimal` everywhere and are stored as whole cents, so
//! sums over many orders stay exact.

use rust_decimal::prelude::*;

/// Monetary values carry at most 2 decimal places
pub const DECIMAL_PLACES: u32 = 2;

/// Largest order total, in cents (99,999,999.99)
pub const MAX_TOTAL_CENTS: i64 = 9_999_999_999;

/// Largest order total
pub const MAX_TOTAL: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Whether `value` fits in 2 decimal places without rounding
pub fn has_valid_scale(value: Decimal) -> bool {
    value.normalize().scale() <= DECIMAL_PLACES
}

/// Sum of item prices, `None` on overflow
pub fn sum_prices<'a>(prices: impl IntoIterator<Item = &'a Decimal>) -> Option<Decimal> {
    prices
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, price| acc.checked_add(*price))
}

/// Convert an amount to whole cents
///
/// `None` if the amount has sub-cent precision or does not fit in `i64`.
pub fn to_cents(value: Decimal) -> Option<i64> {
    if !has_valid_scale(value) {
        return None;
    }
    value.checked_mul(Decimal::ONE_HUNDRED)?.to_i64()
}

/// Convert whole cents back to an amount with 2 decimal places
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}
