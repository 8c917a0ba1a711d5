//! Discount calculation
//!
//! Uses rust_decimal so the percentage is exact before rounding.

use rust_decimal::prelude::*;

/// Whole-percent discount of `price` against `original_price`
///
/// `round((1 - price / original) * 100)`, rounding halves away from zero.
/// Zero when there is no original price, it is not positive, or it does not
/// exceed `price`.
pub fn discount_percent(price: i64, original_price: Option<i64>) -> u32 {
    let Some(original) = original_price else {
        return 0;
    };
    if original <= 0 || original <= price {
        return 0;
    }

    let ratio = Decimal::from(price) / Decimal::from(original);
    ((Decimal::ONE - ratio) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or_default()
}

/// Badge text such as `-22%`, only for a positive discount
pub fn discount_badge(percent: u32) -> Option<String> {
    (percent > 0).then(|| format!("-{}%", percent))
}
