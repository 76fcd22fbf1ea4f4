//! # Order Pricing
//!
//! Computes an order's total price when the form leaves it blank.
//!
//! ```text
//! Book.cost × quantity ──► subtotal ──► − coupon discount ──► totalPrice
//!                                        (never below $0.00)
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

/// Computes the total for a single-line order.
///
/// ## Rules
/// - `quantity` must be in `1..=MAX_ITEM_QUANTITY`
/// - The coupon discount is subtracted from the subtotal and the result is
///   clamped at zero
///
/// ## Example
/// ```rust
/// use bookstore_core::money::Money;
/// use bookstore_core::pricing::order_total;
///
/// let total = order_total(Money::from_cents(1500), 3, None).unwrap();
/// assert_eq!(total.cents(), 4500);
///
/// let free = order_total(Money::from_cents(500), 1, Some(Money::from_cents(900))).unwrap();
/// assert!(free.is_zero());
/// ```
pub fn order_total(unit_cost: Money, quantity: i64, discount: Option<Money>) -> CoreResult<Money> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        }
        .into());
    }

    if quantity > MAX_ITEM_QUANTITY {
        return Err(CoreError::QuantityTooLarge {
            requested: quantity,
            max: MAX_ITEM_QUANTITY,
        });
    }

    let subtotal = unit_cost
        .checked_multiply(quantity)
        .ok_or_else(|| CoreError::AmountOverflow {
            what: "order subtotal".to_string(),
        })?;

    Ok(match discount {
        Some(discount) => subtotal.saturating_discount(discount),
        None => subtotal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_without_coupon() {
        let total = order_total(Money::from_cents(1299), 2, None).unwrap();
        assert_eq!(total.cents(), 2598);
    }

    #[test]
    fn test_total_with_coupon() {
        let total = order_total(Money::from_cents(1000), 2, Some(Money::from_cents(350))).unwrap();
        assert_eq!(total.cents(), 1650);
    }

    #[test]
    fn test_coupon_larger_than_subtotal_is_free() {
        let total = order_total(Money::from_cents(100), 1, Some(Money::from_cents(1000))).unwrap();
        assert_eq!(total, Money::zero());
    }

    #[test]
    fn test_rejects_bad_quantities() {
        assert!(matches!(
            order_total(Money::from_cents(100), 0, None),
            Err(CoreError::Validation(_))
        ));
        assert!(matches!(
            order_total(Money::from_cents(100), 1000, None),
            Err(CoreError::QuantityTooLarge { requested: 1000, .. })
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            order_total(Money::from_cents(i64::MAX / 2), 3, None),
            Err(CoreError::AmountOverflow { .. })
        ));
    }
}
