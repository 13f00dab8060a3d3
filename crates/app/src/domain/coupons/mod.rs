//! Coupons

pub mod errors;
pub mod models;
pub mod service;
pub mod store;

pub use errors::{CouponStoreError, CouponsServiceError};
pub use service::*;
pub use store::*;
