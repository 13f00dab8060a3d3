//! Shared application domain and storage modules for the coupon service.

pub mod context;
pub mod domain;
