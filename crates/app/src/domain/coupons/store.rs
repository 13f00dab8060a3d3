//! Coupon storage.

use async_trait::async_trait;
use coupon_selector::coupons::Coupon;
use mockall::automock;
use rustc_hash::FxHashSet;
use tokio::sync::RwLock;

use crate::domain::coupons::errors::CouponStoreError;

/// Keyed coupon catalog.
#[automock]
#[async_trait]
pub trait CouponStore: Send + Sync {
    /// Stores a coupon unless its code is already present.
    ///
    /// A rejected insert leaves the catalog unchanged.
    async fn insert_if_absent(&self, coupon: Coupon) -> Result<(), CouponStoreError>;

    /// Returns a snapshot of every stored coupon, in insertion order.
    async fn list_all(&self) -> Vec<Coupon>;
}

/// Process-local, non-durable coupon store.
#[derive(Debug, Default)]
pub struct MemoryCouponStore {
    catalog: RwLock<Catalog>,
}

#[derive(Debug, Default)]
struct Catalog {
    coupons: Vec<Coupon>,
    codes: FxHashSet<String>,
}

impl MemoryCouponStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CouponStore for MemoryCouponStore {
    async fn insert_if_absent(&self, coupon: Coupon) -> Result<(), CouponStoreError> {
        let mut catalog = self.catalog.write().await;

        if !catalog.codes.insert(coupon.code.clone()) {
            return Err(CouponStoreError::DuplicateCode(coupon.code));
        }

        catalog.coupons.push(coupon);

        Ok(())
    }

    async fn list_all(&self) -> Vec<Coupon> {
        self.catalog.read().await.coupons.clone()
    }
}
