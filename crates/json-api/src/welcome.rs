//! Welcome Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Welcome response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct WelcomeResponse {
    /// Always `success`
    pub status: String,

    /// Greeting
    pub message: String,
}

/// Welcome handler
#[endpoint(tags("health"), summary = "API welcome banner")]
pub(crate) async fn handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        status: "success".to_string(),
        message: "Welcome to Coupon Management API".to_string(),
    })
}
