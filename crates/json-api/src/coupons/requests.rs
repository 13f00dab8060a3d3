//! Coupon Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use coupon_selector::{
    cart::{Cart, CartItem},
    users::UserContext,
};

use crate::coupons::{errors::InvalidPayload, payloads::amount};

/// Shopper profile
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserContextRequest {
    pub user_id: String,
    pub user_tier: String,
    pub country: String,
    pub lifetime_spend: f64,
    pub orders_placed: u32,
}

/// Cart line
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CartItemRequest {
    pub product_id: String,
    pub category: String,
    pub unit_price: f64,
    pub quantity: u32,
}

/// Cart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartRequest {
    pub items: Vec<CartItemRequest>,
}

/// Best Coupon Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct BestCouponRequest {
    pub user: UserContextRequest,
    pub cart: CartRequest,
}

impl TryFrom<UserContextRequest> for UserContext {
    type Error = InvalidPayload;

    fn try_from(request: UserContextRequest) -> Result<Self, Self::Error> {
        Ok(UserContext {
            user_id: request.user_id,
            tier: request.user_tier,
            country: request.country,
            lifetime_spend: amount("lifetimeSpend", request.lifetime_spend)?,
            orders_placed: request.orders_placed,
        })
    }
}

impl TryFrom<CartItemRequest> for CartItem {
    type Error = InvalidPayload;

    fn try_from(request: CartItemRequest) -> Result<Self, Self::Error> {
        Ok(CartItem::new(
            request.product_id,
            request.category,
            amount("unitPrice", request.unit_price)?,
            request.quantity,
        ))
    }
}

impl TryFrom<CartRequest> for Cart {
    type Error = InvalidPayload;

    fn try_from(request: CartRequest) -> Result<Self, Self::Error> {
        let items = request
            .items
            .into_iter()
            .map(CartItem::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_items(items))
    }
}

impl BestCouponRequest {
    /// Split into the domain user and cart.
    pub(crate) fn into_parts(self) -> Result<(UserContext, Cart), InvalidPayload> {
        Ok((UserContext::try_from(self.user)?, Cart::try_from(self.cart)?))
    }
}
