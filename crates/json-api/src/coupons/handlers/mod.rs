//! Coupon Handlers

pub(crate) mod best;
pub(crate) mod create;
pub(crate) mod index;
