//! Coupons service errors.

use thiserror::Error;

/// Errors raised by a coupon store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponStoreError {
    /// A coupon with this code is already stored.
    #[error("duplicate coupon code '{0}'")]
    DuplicateCode(String),
}

/// Errors raised by the coupons service.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CouponsServiceError {
    /// A coupon with this code already exists; the catalog was left unchanged.
    #[error("coupon with code '{0}' already exists")]
    AlreadyExists(String),
}

impl From<CouponStoreError> for CouponsServiceError {
    fn from(error: CouponStoreError) -> Self {
        match error {
            CouponStoreError::DuplicateCode(code) => Self::AlreadyExists(code),
        }
    }
}
