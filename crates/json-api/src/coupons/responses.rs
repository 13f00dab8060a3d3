//! Coupon Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use coupon_selector::coupons::Coupon;
use coupon_selector_app::domain::coupons::models::BestCoupon;

use crate::coupons::{
    errors::UnrepresentableAmount,
    payloads::{CouponPayload, wire_amount},
};

/// Coupon Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponCreatedResponse {
    /// Always `success`
    pub status: String,

    /// Human readable outcome
    pub message: String,

    /// Code of the stored coupon
    pub code: String,
}

impl CouponCreatedResponse {
    pub(crate) fn new(code: String) -> Self {
        Self {
            status: "success".to_string(),
            message: "Coupon created successfully".to_string(),
            code,
        }
    }
}

/// Coupons Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CouponsResponse {
    /// Every stored coupon, in insertion order
    pub coupons: Vec<CouponPayload>,
}

impl TryFrom<Vec<Coupon>> for CouponsResponse {
    type Error = UnrepresentableAmount;

    fn try_from(coupons: Vec<Coupon>) -> Result<Self, Self::Error> {
        Ok(Self {
            coupons: coupons
                .iter()
                .map(CouponPayload::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

/// Best Coupon Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BestCouponResponse {
    /// Winning coupon, `null` when no coupon applies
    pub coupon: Option<CouponPayload>,

    /// Discount the winning coupon yields
    pub discount: f64,
}

impl TryFrom<BestCoupon> for BestCouponResponse {
    type Error = UnrepresentableAmount;

    fn try_from(best: BestCoupon) -> Result<Self, Self::Error> {
        Ok(Self {
            coupon: best.coupon.as_ref().map(CouponPayload::try_from).transpose()?,
            discount: wire_amount("discount", best.discount)?,
        })
    }
}
