//! Coupon Selector prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartItem, cart_value, categories, item_count},
    coupons::{Coupon, DiscountType},
    discounts::discount,
    eligibility::{Eligibility, is_cart_eligible, is_user_eligible},
    labels::LabelSet,
    selector::{Selection, select_best},
    users::UserContext,
    validity::is_valid_on,
};
