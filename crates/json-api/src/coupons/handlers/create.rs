//! Create Coupon Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use coupon_selector::coupons::Coupon;

use crate::{
    coupons::{
        errors::{into_bad_request, into_status_error},
        payloads::CouponPayload,
        responses::CouponCreatedResponse,
    },
    extensions::*,
};

/// Create Coupon Handler
#[endpoint(
    tags("coupons"),
    summary = "Create Coupon",
    responses(
        (status_code = StatusCode::CREATED, description = "Coupon created"),
        (status_code = StatusCode::CONFLICT, description = "Coupon code already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CouponPayload>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CouponCreatedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let coupon = Coupon::try_from(json.into_inner()).map_err(into_bad_request)?;
    let code = coupon.code.clone();

    state
        .app
        .coupons
        .create_coupon(coupon)
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(CouponCreatedResponse::new(code)))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use coupon_selector_app::domain::coupons::{CouponsServiceError, MockCouponsService};

    use crate::test_helpers::{coupon_json, coupons_service, make_coupon};

    use super::*;

    fn make_service(coupons: MockCouponsService) -> Service {
        coupons_service(coupons, Router::with_path("coupons").post(handler))
    }

    fn never_called() -> MockCouponsService {
        let mut coupons = MockCouponsService::new();

        coupons.expect_create_coupon().never();
        coupons.expect_list_coupons().never();
        coupons.expect_best_coupon().never();

        coupons
    }

    #[tokio::test]
    async fn test_create_coupon_success() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_create_coupon()
            .once()
            .withf(|coupon| *coupon == make_coupon("SAVE10"))
            .return_once(|_| Ok(()));

        coupons.expect_list_coupons().never();
        coupons.expect_best_coupon().never();

        let mut res = TestClient::post("http://example.com/coupons")
            .json(&coupon_json("SAVE10"))
            .send(&make_service(coupons))
            .await;

        let body: CouponCreatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.status, "success");
        assert_eq!(body.message, "Coupon created successfully");
        assert_eq!(body.code, "SAVE10");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_with_eligibility() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_create_coupon()
            .once()
            .withf(|coupon| {
                coupon.eligibility.as_ref().is_some_and(|rules| {
                    rules.first_order_only == Some(true)
                        && rules
                            .applicable_categories
                            .as_ref()
                            .is_some_and(|categories| categories.contains("electronics"))
                })
            })
            .return_once(|_| Ok(()));

        coupons.expect_list_coupons().never();
        coupons.expect_best_coupon().never();

        let mut body = coupon_json("NEWBIE");

        body["eligibility"] = json!({
            "firstOrderOnly": true,
            "applicableCategories": ["electronics"],
        });

        let res = TestClient::post("http://example.com/coupons")
            .json(&body)
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_conflict_returns_409() -> TestResult {
        let mut coupons = MockCouponsService::new();

        coupons
            .expect_create_coupon()
            .once()
            .return_once(|coupon| Err(CouponsServiceError::AlreadyExists(coupon.code)));

        coupons.expect_list_coupons().never();
        coupons.expect_best_coupon().never();

        let res = TestClient::post("http://example.com/coupons")
            .json(&coupon_json("SAVE10"))
            .send(&make_service(coupons))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_invalid_date_returns_400() -> TestResult {
        let mut body = coupon_json("SAVE10");

        body["startDate"] = json!("01/01/2025");

        let res = TestClient::post("http://example.com/coupons")
            .json(&body)
            .send(&make_service(never_called()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_out_of_range_amount_returns_400() -> TestResult {
        let mut body = coupon_json("SAVE10");

        body["maxDiscountAmount"] = json!(1e30);

        let mut res = TestClient::post("http://example.com/coupons")
            .json(&body)
            .send(&make_service(never_called()))
            .await;

        let error = res.take_string().await?;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));
        assert!(error.contains("maxDiscountAmount"), "got: {error}");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_unknown_discount_type_returns_400() -> TestResult {
        let mut body = coupon_json("SAVE10");

        body["discountType"] = json!("BOGO");

        let res = TestClient::post("http://example.com/coupons")
            .json(&body)
            .send(&make_service(never_called()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_coupon_missing_code_returns_400() -> TestResult {
        let mut body = coupon_json("SAVE10");

        if let Some(fields) = body.as_object_mut() {
            fields.remove("code");
        }

        let res = TestClient::post("http://example.com/coupons")
            .json(&body)
            .send(&make_service(never_called()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
