//! Users

use rust_decimal::Decimal;

/// The shopper a coupon is being selected for.
#[derive(Debug, Clone, PartialEq)]
pub struct UserContext {
    /// User identifier
    pub user_id: String,

    /// Loyalty tier, matched against allowed tiers
    pub tier: String,

    /// Country code, matched against allowed countries
    pub country: String,

    /// Total amount the user has spent so far
    pub lifetime_spend: Decimal,

    /// Number of orders the user has placed so far
    pub orders_placed: u32,
}
