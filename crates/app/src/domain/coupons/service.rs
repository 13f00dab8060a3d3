//! Coupons service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use coupon_selector::{
    cart::Cart, coupons::Coupon, selector::select_best, users::UserContext,
};
use jiff::civil::Date;
use mockall::automock;
use tracing::{debug, info, warn};

use crate::domain::coupons::{errors::CouponsServiceError, models::BestCoupon, store::CouponStore};

/// Coupons service backed by an injected [`CouponStore`].
#[derive(Clone)]
pub struct StoreCouponsService {
    store: Arc<dyn CouponStore>,
}

impl StoreCouponsService {
    /// Create a service over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn CouponStore>) -> Self {
        Self { store }
    }
}

impl fmt::Debug for StoreCouponsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreCouponsService").finish_non_exhaustive()
    }
}

#[async_trait]
impl CouponsService for StoreCouponsService {
    async fn create_coupon(&self, coupon: Coupon) -> Result<(), CouponsServiceError> {
        let code = coupon.code.clone();

        if let Err(error) = self.store.insert_if_absent(coupon).await {
            warn!(code = %code, "rejected coupon: {error}");

            return Err(error.into());
        }

        info!(code = %code, "coupon created");

        Ok(())
    }

    async fn list_coupons(&self) -> Vec<Coupon> {
        self.store.list_all().await
    }

    async fn best_coupon(&self, user: UserContext, cart: Cart, today: Date) -> BestCoupon {
        let catalog = self.store.list_all().await;
        let best = BestCoupon::from(select_best(&catalog, &user, &cart, today));

        debug!(
            user_id = %user.user_id,
            %today,
            candidates = catalog.len(),
            code = best.coupon.as_ref().map(|coupon| coupon.code.as_str()),
            discount = %best.discount,
            "best coupon selected"
        );

        best
    }
}

/// Coupon catalog management and best-coupon selection.
#[automock]
#[async_trait]
pub trait CouponsService: Send + Sync {
    /// Adds a coupon to the catalog, rejecting duplicate codes.
    async fn create_coupon(&self, coupon: Coupon) -> Result<(), CouponsServiceError>;

    /// Lists every coupon in the catalog, in insertion order.
    async fn list_coupons(&self) -> Vec<Coupon>;

    /// Selects the best coupon for the user and cart on the given day.
    async fn best_coupon(&self, user: UserContext, cart: Cart, today: Date) -> BestCoupon;
}
