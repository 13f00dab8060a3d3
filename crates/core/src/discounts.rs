//! Discounts

use rust_decimal::Decimal;

use crate::{
    cart::{Cart, cart_value},
    coupons::{Coupon, DiscountType},
};

/// Calculate the discount a coupon yields on a cart.
///
/// Only meaningful once the coupon has passed the validity and eligibility checks.
///
/// - [`DiscountType::Flat`] takes `discount_value` as-is.
/// - [`DiscountType::Percent`] takes `discount_value / 100` of the cart value.
///
/// The result is capped to `max_discount_amount`. A coupon without a `max_discount_amount`
/// yields zero, whatever its type or value. The result never exceeds the cart value.
pub fn discount(coupon: &Coupon, cart: &Cart) -> Decimal {
    let value = cart_value(cart);

    let raw = match coupon.discount_type {
        DiscountType::Flat => coupon.discount_value,
        DiscountType::Percent => percent_of(coupon.discount_value, value),
    };

    let capped = match coupon.max_discount_amount {
        Some(max) => raw.min(max),
        None => Decimal::ZERO,
    };

    capped.min(value)
}

/// Calculate `percent` (0-100 scale) of an amount.
fn percent_of(percent: Decimal, amount: Decimal) -> Decimal {
    (percent / Decimal::ONE_HUNDRED).saturating_mul(amount)
}
