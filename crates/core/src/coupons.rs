//! Coupons

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::eligibility::Eligibility;

/// How a coupon's `discount_value` is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountType {
    /// A fixed amount off, independent of the cart value.
    Flat,

    /// A percentage (0-100 scale) of the cart value.
    Percent,
}

/// A discount offer with a validity window and optional targeting rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Coupon {
    /// Unique coupon code
    pub code: String,

    /// Human readable description
    pub description: String,

    /// Discount kind
    pub discount_type: DiscountType,

    /// Amount or percentage, depending on `discount_type`
    pub discount_value: Decimal,

    /// First day the coupon is valid (inclusive)
    pub start_date: Date,

    /// Last day the coupon is valid (inclusive)
    pub end_date: Date,

    /// Upper bound on the discount
    pub max_discount_amount: Option<Decimal>,

    /// Per-user redemption limit. Carried but not enforced during selection.
    pub usage_limit_per_user: Option<u32>,

    /// Targeting rules; `None` means everyone and every cart qualifies
    pub eligibility: Option<Eligibility>,
}
