//! Coupon Eligibility Rules
//!
//! Independent, optional predicates over the user and the cart. Every predicate that is set must
//! hold; a predicate left as `None` imposes no constraint.

use rust_decimal::Decimal;

use crate::{
    cart::{Cart, cart_value, categories, item_count},
    labels::LabelSet,
    users::UserContext,
};

/// Targeting rules attached to a coupon.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Eligibility {
    /// The user's tier must be one of these.
    pub allowed_user_tiers: Option<LabelSet>,

    /// The user's lifetime spend must be at least this much.
    pub min_lifetime_spend: Option<Decimal>,

    /// The user must have placed at least this many orders.
    pub min_orders_placed: Option<u32>,

    /// When `Some(true)`, the user must not have placed any orders yet.
    pub first_order_only: Option<bool>,

    /// The user's country must be one of these.
    pub allowed_countries: Option<LabelSet>,

    /// The cart must be worth at least this much.
    pub min_cart_value: Option<Decimal>,

    /// The cart must hold at least this many units.
    pub min_items_count: Option<u64>,

    /// At least one cart item must belong to one of these categories.
    pub applicable_categories: Option<LabelSet>,

    /// No cart item may belong to any of these categories.
    pub excluded_categories: Option<LabelSet>,
}

impl Eligibility {
    /// Evaluate the user-level predicates, in declaration order, stopping at the first failure.
    pub fn admits_user(&self, user: &UserContext) -> bool {
        self.allowed_user_tiers
            .as_ref()
            .is_none_or(|tiers| tiers.contains(&user.tier))
            && self
                .min_lifetime_spend
                .is_none_or(|min| user.lifetime_spend >= min)
            && self
                .min_orders_placed
                .is_none_or(|min| user.orders_placed >= min)
            && (self.first_order_only != Some(true) || user.orders_placed == 0)
            && self
                .allowed_countries
                .as_ref()
                .is_none_or(|countries| countries.contains(&user.country))
    }

    /// Evaluate the cart-level predicates, in declaration order, stopping at the first failure.
    pub fn admits_cart(&self, cart: &Cart) -> bool {
        self.min_cart_value.is_none_or(|min| cart_value(cart) >= min)
            && self.min_items_count.is_none_or(|min| item_count(cart) >= min)
            && self
                .applicable_categories
                .as_ref()
                .is_none_or(|applicable| applicable.intersects(&categories(cart)))
            && self
                .excluded_categories
                .as_ref()
                .is_none_or(|excluded| !excluded.intersects(&categories(cart)))
    }
}

/// Check a user against optional eligibility rules. Missing rules admit everyone.
pub fn is_user_eligible(eligibility: Option<&Eligibility>, user: &UserContext) -> bool {
    eligibility.is_none_or(|rules| rules.admits_user(user))
}

/// Check a cart against optional eligibility rules. Missing rules admit every cart.
pub fn is_cart_eligible(eligibility: Option<&Eligibility>, cart: &Cart) -> bool {
    eligibility.is_none_or(|rules| rules.admits_cart(cart))
}
