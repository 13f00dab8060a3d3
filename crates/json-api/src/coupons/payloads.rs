//! Coupon Payloads
//!
//! Wire shape of a coupon, used both for creation requests and in responses.

use jiff::civil::Date;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use coupon_selector::{
    coupons::{Coupon, DiscountType},
    eligibility::Eligibility,
    labels::LabelSet,
};

use crate::coupons::errors::{InvalidPayload, UnrepresentableAmount};

/// Discount kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum DiscountTypePayload {
    /// Fixed amount off
    Flat,

    /// Percentage of the cart value
    Percent,
}

impl From<DiscountTypePayload> for DiscountType {
    fn from(payload: DiscountTypePayload) -> Self {
        match payload {
            DiscountTypePayload::Flat => DiscountType::Flat,
            DiscountTypePayload::Percent => DiscountType::Percent,
        }
    }
}

impl From<DiscountType> for DiscountTypePayload {
    fn from(discount_type: DiscountType) -> Self {
        match discount_type {
            DiscountType::Flat => DiscountTypePayload::Flat,
            DiscountType::Percent => DiscountTypePayload::Percent,
        }
    }
}

/// Coupon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CouponPayload {
    /// Unique coupon code
    pub code: String,

    /// Human readable description
    pub description: String,

    /// `FLAT` or `PERCENT`
    pub discount_type: DiscountTypePayload,

    /// Amount off, or percentage (0-100) for `PERCENT` coupons
    pub discount_value: f64,

    /// First valid day, `YYYY-MM-DD`
    pub start_date: String,

    /// Last valid day, `YYYY-MM-DD`
    pub end_date: String,

    /// Upper bound on the discount
    pub max_discount_amount: Option<f64>,

    /// Per-user redemption limit (informational)
    pub usage_limit_per_user: Option<u32>,

    /// Targeting rules
    pub eligibility: Option<EligibilityPayload>,
}

/// Coupon targeting rules. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EligibilityPayload {
    pub allowed_user_tiers: Option<Vec<String>>,
    pub min_lifetime_spend: Option<f64>,
    pub min_orders_placed: Option<u32>,
    pub first_order_only: Option<bool>,
    pub allowed_countries: Option<Vec<String>>,
    pub min_cart_value: Option<f64>,
    pub min_items_count: Option<u64>,
    pub applicable_categories: Option<Vec<String>>,
    pub excluded_categories: Option<Vec<String>>,
}

impl TryFrom<CouponPayload> for Coupon {
    type Error = InvalidPayload;

    fn try_from(payload: CouponPayload) -> Result<Self, Self::Error> {
        Ok(Coupon {
            code: payload.code,
            description: payload.description,
            discount_type: payload.discount_type.into(),
            discount_value: amount("discountValue", payload.discount_value)?,
            start_date: date("startDate", &payload.start_date)?,
            end_date: date("endDate", &payload.end_date)?,
            max_discount_amount: optional_amount(
                "maxDiscountAmount",
                payload.max_discount_amount,
            )?,
            usage_limit_per_user: payload.usage_limit_per_user,
            eligibility: payload.eligibility.map(Eligibility::try_from).transpose()?,
        })
    }
}

impl TryFrom<EligibilityPayload> for Eligibility {
    type Error = InvalidPayload;

    fn try_from(payload: EligibilityPayload) -> Result<Self, Self::Error> {
        Ok(Eligibility {
            allowed_user_tiers: payload.allowed_user_tiers.map(label_set),
            min_lifetime_spend: optional_amount("minLifetimeSpend", payload.min_lifetime_spend)?,
            min_orders_placed: payload.min_orders_placed,
            first_order_only: payload.first_order_only,
            allowed_countries: payload.allowed_countries.map(label_set),
            min_cart_value: optional_amount("minCartValue", payload.min_cart_value)?,
            min_items_count: payload.min_items_count,
            applicable_categories: payload.applicable_categories.map(label_set),
            excluded_categories: payload.excluded_categories.map(label_set),
        })
    }
}

impl TryFrom<&Coupon> for CouponPayload {
    type Error = UnrepresentableAmount;

    fn try_from(coupon: &Coupon) -> Result<Self, Self::Error> {
        Ok(CouponPayload {
            code: coupon.code.clone(),
            description: coupon.description.clone(),
            discount_type: coupon.discount_type.into(),
            discount_value: wire_amount("discountValue", coupon.discount_value)?,
            start_date: coupon.start_date.to_string(),
            end_date: coupon.end_date.to_string(),
            max_discount_amount: coupon
                .max_discount_amount
                .map(|max| wire_amount("maxDiscountAmount", max))
                .transpose()?,
            usage_limit_per_user: coupon.usage_limit_per_user,
            eligibility: coupon
                .eligibility
                .as_ref()
                .map(EligibilityPayload::try_from)
                .transpose()?,
        })
    }
}

impl TryFrom<&Eligibility> for EligibilityPayload {
    type Error = UnrepresentableAmount;

    fn try_from(eligibility: &Eligibility) -> Result<Self, Self::Error> {
        Ok(EligibilityPayload {
            allowed_user_tiers: eligibility.allowed_user_tiers.as_ref().map(labels),
            min_lifetime_spend: eligibility
                .min_lifetime_spend
                .map(|min| wire_amount("minLifetimeSpend", min))
                .transpose()?,
            min_orders_placed: eligibility.min_orders_placed,
            first_order_only: eligibility.first_order_only,
            allowed_countries: eligibility.allowed_countries.as_ref().map(labels),
            min_cart_value: eligibility
                .min_cart_value
                .map(|min| wire_amount("minCartValue", min))
                .transpose()?,
            min_items_count: eligibility.min_items_count,
            applicable_categories: eligibility.applicable_categories.as_ref().map(labels),
            excluded_categories: eligibility.excluded_categories.as_ref().map(labels),
        })
    }
}

pub(crate) fn amount(field: &'static str, value: f64) -> Result<Decimal, InvalidPayload> {
    Decimal::try_from(value).map_err(|source| InvalidPayload::Amount { field, source })
}

fn optional_amount(
    field: &'static str,
    value: Option<f64>,
) -> Result<Option<Decimal>, InvalidPayload> {
    value.map(|value| amount(field, value)).transpose()
}

fn date(field: &'static str, value: &str) -> Result<Date, InvalidPayload> {
    value
        .parse::<Date>()
        .map_err(|source| InvalidPayload::Date { field, source })
}

pub(crate) fn wire_amount(
    field: &'static str,
    value: Decimal,
) -> Result<f64, UnrepresentableAmount> {
    value.to_f64().ok_or(UnrepresentableAmount { field, value })
}

fn label_set(values: Vec<String>) -> LabelSet {
    values.into_iter().collect()
}

fn labels(set: &LabelSet) -> Vec<String> {
    set.iter().cloned().collect()
}
