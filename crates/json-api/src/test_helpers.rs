//! Test helpers.

use std::sync::Arc;

use jiff::civil::date;
use rust_decimal::dec;
use salvo::{affix_state::inject, prelude::*};
use serde_json::{Value, json};

use coupon_selector::coupons::{Coupon, DiscountType};
use coupon_selector_app::{context::AppContext, domain::coupons::MockCouponsService};

use crate::state::State;

pub(crate) fn state_with_coupons(coupons: MockCouponsService) -> Arc<State> {
    State::from_app_context(AppContext::new(Arc::new(coupons)))
}

pub(crate) fn coupons_service(coupons: MockCouponsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_coupons(coupons)))
            .push(route),
    )
}

/// Flat 10 off with a matching cap, valid throughout 2025.
pub(crate) fn make_coupon(code: &str) -> Coupon {
    Coupon {
        code: code.to_string(),
        description: format!("{code} description"),
        discount_type: DiscountType::Flat,
        discount_value: dec!(10),
        start_date: date(2025, 1, 1),
        end_date: date(2025, 12, 31),
        max_discount_amount: Some(dec!(10)),
        usage_limit_per_user: None,
        eligibility: None,
    }
}

/// Wire form of [`make_coupon`].
pub(crate) fn coupon_json(code: &str) -> Value {
    json!({
        "code": code,
        "description": format!("{code} description"),
        "discountType": "FLAT",
        "discountValue": 10.0,
        "startDate": "2025-01-01",
        "endDate": "2025-12-31",
        "maxDiscountAmount": 10.0,
    })
}

pub(crate) fn best_request_json() -> Value {
    json!({
        "user": {
            "userId": "u1",
            "userTier": "NEW",
            "country": "IN",
            "lifetimeSpend": 0.0,
            "ordersPlaced": 0,
        },
        "cart": {
            "items": [
                { "productId": "p1", "category": "electronics", "unitPrice": 100.0, "quantity": 2 },
            ],
        },
    })
}
