//! Coupon Index Handler

use salvo::prelude::*;

use crate::{coupons::responses::CouponsResponse, extensions::*};

/// Coupon Index Handler
///
/// Returns every stored coupon in insertion order.
#[endpoint(tags("coupons"), summary = "List Coupons")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CouponsResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let coupons = state.app.coupons.list_coupons().await;

    Ok(Json(
        CouponsResponse::try_from(coupons).or_500("failed to encode coupons")?,
    ))
}
