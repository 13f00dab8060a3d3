//! Coupon Selector
//!
//! Pure coupon selection: given a catalog of coupons, a user and a cart, find the single coupon
//! that yields the largest discount today.
//!
//! Selection runs each coupon through the same pipeline, stopping at the first failing step:
//!
//! 1. [`validity::is_valid_on`] checks the coupon's inclusive date window.
//! 2. [`eligibility::is_user_eligible`] checks user targeting rules.
//! 3. [`eligibility::is_cart_eligible`] checks cart targeting rules.
//! 4. [`discounts::discount`] computes the monetary discount.
//!
//! [`selector::select_best`] ties the steps together and breaks ties deterministically.

pub mod cart;
pub mod coupons;
pub mod discounts;
pub mod eligibility;
pub mod labels;
pub mod prelude;
pub mod selector;
pub mod users;
pub mod validity;
