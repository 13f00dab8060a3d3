//! App Context

use std::{fmt, sync::Arc};

use crate::domain::coupons::{CouponsService, MemoryCouponStore, StoreCouponsService};

/// Services shared by every request.
#[derive(Clone)]
pub struct AppContext {
    /// Coupon catalog and selection
    pub coupons: Arc<dyn CouponsService>,
}

impl AppContext {
    /// Build application context from an existing coupons service.
    #[must_use]
    pub fn new(coupons: Arc<dyn CouponsService>) -> Self {
        Self { coupons }
    }

    /// Build application context over an empty, process-local coupon store.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(StoreCouponsService::new(Arc::new(
            MemoryCouponStore::new(),
        ))))
    }
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}
