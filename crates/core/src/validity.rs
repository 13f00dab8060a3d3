//! Coupon validity windows

use jiff::civil::Date;

use crate::coupons::Coupon;

/// Check whether `today` falls inside the coupon's window, inclusive at both ends.
///
/// The date is always supplied by the caller; selection never reads the system clock.
pub fn is_valid_on(coupon: &Coupon, today: Date) -> bool {
    coupon.start_date <= today && today <= coupon.end_date
}
