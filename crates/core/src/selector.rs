//! Best Coupon Selection

use std::cmp::Ordering;

use jiff::civil::Date;
use rust_decimal::Decimal;

use crate::{
    cart::Cart,
    coupons::Coupon,
    discounts::discount,
    eligibility::{is_cart_eligible, is_user_eligible},
    users::UserContext,
    validity::is_valid_on,
};

/// Outcome of a selection: the winning coupon, if any, and the discount it yields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    /// Winning coupon
    pub coupon: Option<&'a Coupon>,

    /// Discount the winning coupon yields; zero when there is no winner
    pub discount: Decimal,
}

impl Selection<'_> {
    /// A selection with no winner and no discount.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            coupon: None,
            discount: Decimal::ZERO,
        }
    }

    /// Check if a coupon was selected.
    pub const fn is_some(&self) -> bool {
        self.coupon.is_some()
    }
}

impl Default for Selection<'_> {
    fn default() -> Self {
        Self::none()
    }
}

/// Select the coupon giving the largest discount on `cart` for `user` on `today`.
///
/// Coupons are visited once, in input order. A coupon is skipped if it is not valid on `today`,
/// if the user or the cart is not eligible, or if it yields no positive discount.
///
/// Ties on the discount amount go to the coupon that expires first, then to the coupon with the
/// lexicographically smaller code.
pub fn select_best<'a, I>(coupons: I, user: &UserContext, cart: &Cart, today: Date) -> Selection<'a>
where
    I: IntoIterator<Item = &'a Coupon>,
{
    coupons
        .into_iter()
        .filter(|coupon| is_valid_on(coupon, today))
        .filter(|coupon| is_user_eligible(coupon.eligibility.as_ref(), user))
        .filter(|coupon| is_cart_eligible(coupon.eligibility.as_ref(), cart))
        .map(|coupon| (coupon, discount(coupon, cart)))
        .filter(|(_, amount)| *amount > Decimal::ZERO)
        .fold(Selection::none(), |best, (coupon, amount)| {
            if beats(coupon, amount, &best) {
                Selection {
                    coupon: Some(coupon),
                    discount: amount,
                }
            } else {
                best
            }
        })
}

/// Check if a candidate should replace the running best.
fn beats(candidate: &Coupon, amount: Decimal, best: &Selection<'_>) -> bool {
    match (amount.cmp(&best.discount), best.coupon) {
        (Ordering::Greater, _) => true,
        (Ordering::Equal, Some(current)) => {
            (candidate.end_date, &candidate.code) < (current.end_date, &current.code)
        }
        (Ordering::Equal | Ordering::Less, _) => false,
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rust_decimal::dec;

    use crate::{
        cart::CartItem,
        coupons::DiscountType,
        eligibility::Eligibility,
        labels::LabelSet,
    };

    use super::*;

    fn flat(code: &str, amount: Decimal, end_date: Date) -> Coupon {
        Coupon {
            code: code.to_string(),
            description: format!("{code} flat"),
            discount_type: DiscountType::Flat,
            discount_value: amount,
            start_date: date(2025, 1, 1),
            end_date,
            max_discount_amount: Some(amount),
            usage_limit_per_user: None,
            eligibility: None,
        }
    }

    fn user() -> UserContext {
        UserContext {
            user_id: "u1".to_string(),
            tier: "GOLD".to_string(),
            country: "IN".to_string(),
            lifetime_spend: dec!(2500),
            orders_placed: 4,
        }
    }

    fn cart() -> Cart {
        Cart::with_items([CartItem::new("p1", "electronics", dec!(100), 2)])
    }

    const TODAY: Date = date(2025, 1, 3);

    #[test]
    fn empty_catalog_selects_nothing() {
        let coupons: [Coupon; 0] = [];

        let selection = select_best(&coupons, &user(), &cart(), TODAY);

        assert_eq!(selection, Selection::none());
        assert!(!selection.is_some());
    }

    #[test]
    fn larger_discount_wins() {
        let coupons = [
            flat("SMALL", dec!(10), date(2025, 1, 31)),
            flat("LARGE", dec!(40), date(2025, 1, 31)),
            flat("MEDIUM", dec!(25), date(2025, 1, 31)),
        ];

        let selection = select_best(&coupons, &user(), &cart(), TODAY);

        assert_eq!(selection.coupon.map(|c| c.code.as_str()), Some("LARGE"));
        assert_eq!(selection.discount, dec!(40));
    }

    #[test]
    fn tie_prefers_earlier_end_date() {
        let coupons = [
            flat("A", dec!(50), date(2025, 1, 10)),
            flat("B", dec!(50), date(2025, 1, 5)),
        ];

        let selection = select_best(&coupons, &user(), &cart(), TODAY);

        assert_eq!(selection.coupon.map(|c| c.code.as_str()), Some("B"));
        assert_eq!(selection.discount, dec!(50));
    }

    #[test]
    fn tie_on_end_date_prefers_smaller_code() {
        let coupons = [
            flat("XYZ", dec!(50), date(2025, 1, 5)),
            flat("ABC", dec!(50), date(2025, 1, 5)),
        ];

        let selection = select_best(&coupons, &user(), &cart(), TODAY);

        assert_eq!(selection.coupon.map(|c| c.code.as_str()), Some("ABC"));
    }

    #[test]
    fn tie_break_is_independent_of_input_order() {
        let abc = flat("ABC", dec!(50), date(2025, 1, 5));
        let xyz = flat("XYZ", dec!(50), date(2025, 1, 5));

        let forward = [abc.clone(), xyz.clone()];
        let reversed = [xyz, abc];

        let first = select_best(&forward, &user(), &cart(), TODAY);
        let second = select_best(&reversed, &user(), &cart(), TODAY);

        assert_eq!(first.coupon.map(|c| c.code.as_str()), Some("ABC"));
        assert_eq!(second.coupon.map(|c| c.code.as_str()), Some("ABC"));
    }

    #[test]
    fn expired_and_future_coupons_are_skipped() {
        let mut future = flat("FUTURE", dec!(90), date(2025, 12, 31));
        future.start_date = date(2025, 6, 1);

        let coupons = [
            flat("EXPIRED", dec!(80), date(2025, 1, 2)),
            future,
            flat("CURRENT", dec!(5), date(2025, 1, 3)),
        ];

        let selection = select_best(&coupons, &user(), &cart(), TODAY);

        assert_eq!(selection.coupon.map(|c| c.code.as_str()), Some("CURRENT"));
        assert_eq!(selection.discount, dec!(5));
    }

    #[test]
    fn ineligible_coupons_are_skipped() {
        let mut wrong_tier = flat("SILVER_ONLY", dec!(90), date(2025, 1, 31));
        wrong_tier.eligibility = Some(Eligibility {
            allowed_user_tiers: Some(LabelSet::from_strs(&["SILVER"])),
            ..Eligibility::default()
        });

        let mut wrong_cart = flat("BOOKS_ONLY", dec!(80), date(2025, 1, 31));
        wrong_cart.eligibility = Some(Eligibility {
            applicable_categories: Some(LabelSet::from_strs(&["books"])),
            ..Eligibility::default()
        });

        let coupons = [wrong_tier, wrong_cart, flat("ANY", dec!(1), date(2025, 1, 31))];

        let selection = select_best(&coupons, &user(), &cart(), TODAY);

        assert_eq!(selection.coupon.map(|c| c.code.as_str()), Some("ANY"));
    }

    #[test]
    fn zero_discount_coupons_never_win() {
        let mut uncapped = flat("UNCAPPED", dec!(30), date(2025, 1, 31));
        uncapped.max_discount_amount = None;

        let coupons = [uncapped];

        let selection = select_best(&coupons, &user(), &cart(), TODAY);

        assert_eq!(selection, Selection::none());
    }

    #[test]
    fn beats_requires_strictly_greater_or_tie_break() {
        let current = flat("M", dec!(20), date(2025, 1, 10));
        let best = Selection {
            coupon: Some(&current),
            discount: dec!(20),
        };

        assert!(beats(&flat("Z", dec!(21), date(2025, 2, 1)), dec!(21), &best));
        assert!(!beats(&flat("A", dec!(19), date(2025, 1, 1)), dec!(19), &best));
        assert!(beats(&flat("Z", dec!(20), date(2025, 1, 9)), dec!(20), &best));
        assert!(beats(&flat("A", dec!(20), date(2025, 1, 10)), dec!(20), &best));
        assert!(!beats(&flat("M", dec!(20), date(2025, 1, 10)), dec!(20), &best));
        assert!(!beats(&flat("A", dec!(20), date(2025, 1, 11)), dec!(20), &best));
    }
}
