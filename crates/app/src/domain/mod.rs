//! Coupon Service Domain Concerns

pub mod coupons;
