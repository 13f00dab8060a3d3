//! Best Coupon Handler

use salvo::{
    oapi::extract::{JsonBody, QueryParam},
    prelude::*,
};

use crate::{
    coupons::{errors::into_bad_request, requests::BestCouponRequest, responses::BestCouponResponse},
    extensions::*,
};

/// Best Coupon Handler
///
/// Picks the coupon yielding the largest discount for the given user and cart. Pass
/// `?on=YYYY-MM-DD` to evaluate validity windows against another day.
#[endpoint(
    tags("coupons"),
    summary = "Best Coupon",
    responses(
        (status_code = StatusCode::OK, description = "Best coupon, or null when none applies"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    on: QueryParam<String, false>,
    json: JsonBody<BestCouponRequest>,
    depot: &mut Depot,
) -> Result<Json<BestCouponResponse>, StatusError> {
    let state = depot.state_or_500()?;
    let today = on.into_selection_date()?;

    let (user, cart) = json.into_inner().into_parts().map_err(into_bad_request)?;

    let best = state.app.coupons.best_coupon(user, cart, today).await;

    Ok(Json(
        BestCouponResponse::try_from(best).or_500("failed to encode best coupon")?,
    ))
}
