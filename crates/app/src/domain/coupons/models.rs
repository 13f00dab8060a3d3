//! Coupon Models

use coupon_selector::{coupons::Coupon, selector::Selection};
use rust_decimal::Decimal;

/// Owned result of a best-coupon lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct BestCoupon {
    /// Winning coupon, if any coupon applies
    pub coupon: Option<Coupon>,

    /// Discount the winning coupon yields; zero when nothing applies
    pub discount: Decimal,
}

impl BestCoupon {
    /// A result with no applicable coupon.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            coupon: None,
            discount: Decimal::ZERO,
        }
    }
}

impl From<Selection<'_>> for BestCoupon {
    fn from(selection: Selection<'_>) -> Self {
        Self {
            coupon: selection.coupon.cloned(),
            discount: selection.discount,
        }
    }
}
