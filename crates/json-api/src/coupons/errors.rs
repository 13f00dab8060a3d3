//! Coupon Errors

use rust_decimal::Decimal;
use salvo::http::StatusError;
use thiserror::Error;
use tracing::debug;

use coupon_selector_app::domain::coupons::CouponsServiceError;

/// A request body that deserialized but cannot become a domain value.
#[derive(Debug, Error)]
pub(crate) enum InvalidPayload {
    /// A date field is not a valid `YYYY-MM-DD` calendar date.
    #[error("{field} is not a valid YYYY-MM-DD date: {source}")]
    Date {
        field: &'static str,
        #[source]
        source: jiff::Error,
    },

    /// An amount field cannot be represented as a decimal.
    #[error("{field} is not a representable amount: {source}")]
    Amount {
        field: &'static str,
        #[source]
        source: rust_decimal::Error,
    },
}

/// A stored amount that cannot be written back as a JSON number.
#[derive(Debug, Error)]
#[error("{field} {value} has no floating-point representation")]
pub(crate) struct UnrepresentableAmount {
    pub(crate) field: &'static str,
    pub(crate) value: Decimal,
}

pub(crate) fn into_status_error(error: CouponsServiceError) -> StatusError {
    match error {
        CouponsServiceError::AlreadyExists(code) => {
            StatusError::conflict().brief(format!("Coupon with code '{code}' already exists"))
        }
    }
}

pub(crate) fn into_bad_request(error: InvalidPayload) -> StatusError {
    debug!("rejected coupon payload: {error}");

    StatusError::bad_request().brief(error.to_string())
}
