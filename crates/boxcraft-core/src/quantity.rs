//! # Order Quantity
//!
//! Keeps the requested order quantity inside the stock ceiling of the
//! selected quantity tier.
//!
//! ## Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Event                    Previous      Tier stock     New value        │
//! │  ─────                    ────────      ──────────     ─────────        │
//! │  first tier selected      (none)        >= 1           1                │
//! │  first tier selected      (none)        0              0 (still unset)  │
//! │  tier changed             250           100            100  (clamp)     │
//! │  tier changed             40            100            40               │
//! │  tier changed             0             100            0  (never raise) │
//! │  tier changed             any           0              0                │
//! │  keystroke "12.7"         any           100            12 (floor)       │
//! │  keystroke "5000"         any           100            100              │
//! │  keystroke "-3" / "abc"   any           100            0                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Changing size, material, finish, print side, speed or color never touches
//! the quantity; only a change of the resolved tier does.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::DEFAULT_ORDER_QUANTITY;

/// Clamps a requested quantity to `[0, max_stock]`, flooring fractions.
///
/// ## Example
/// ```rust
/// use boxcraft_core::quantity::clamp_order_quantity;
/// use rust_decimal::Decimal;
///
/// assert_eq!(clamp_order_quantity(50, 0), 0);
/// assert_eq!(clamp_order_quantity(5000, 100), 100);
/// assert_eq!(clamp_order_quantity(Decimal::new(127, 1), 100), 12);
/// assert_eq!(clamp_order_quantity(-3, 100), 0);
/// ```
pub fn clamp_order_quantity(requested: impl Into<Decimal>, max_stock: i64) -> i64 {
    if max_stock <= 0 {
        return 0;
    }

    let floored = requested.into().floor();
    if floored <= Decimal::ZERO {
        return 0;
    }

    // Anything past i64 is past any real stock ceiling
    floored.to_i64().map_or(max_stock, |q| q.min(max_stock))
}

/// Parses raw quantity input. Blank or non-numeric input counts as zero.
///
/// ## Example
/// ```rust
/// use boxcraft_core::quantity::parse_quantity_input;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_quantity_input(" 12.7 "), Decimal::new(127, 1));
/// assert_eq!(parse_quantity_input(""), Decimal::ZERO);
/// assert_eq!(parse_quantity_input("ten"), Decimal::ZERO);
/// ```
pub fn parse_quantity_input(input: &str) -> Decimal {
    input.trim().parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// The order quantity of one session.
///
/// `None` until the user has a real value: either the default applied when a
/// stocked tier is first selected, or something they typed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderQuantity {
    value: Option<i64>,
}

impl OrderQuantity {
    pub const fn new() -> Self {
        OrderQuantity { value: None }
    }

    /// Restores a previously stored quantity.
    pub const fn with_value(value: i64) -> Self {
        OrderQuantity { value: Some(value) }
    }

    /// The quantity to price. Unset reads as zero.
    #[inline]
    pub fn value(&self) -> i64 {
        self.value.unwrap_or(0)
    }

    #[inline]
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Reacts to the selected tier changing (including the first selection).
    ///
    /// Clamps down, never raises: an explicit zero stays zero.
    pub fn on_tier_selected(&mut self, max_stock: i64) -> i64 {
        self.value = match self.value {
            None if max_stock >= 1 => Some(DEFAULT_ORDER_QUANTITY.min(max_stock)),
            None => None,
            Some(previous) => Some(clamp_order_quantity(previous, max_stock)),
        };
        self.value()
    }

    /// Applies a user-entered quantity against the current tier.
    pub fn request(&mut self, requested: impl Into<Decimal>, max_stock: i64) -> i64 {
        let clamped = clamp_order_quantity(requested, max_stock);
        self.value = Some(clamped);
        clamped
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_stock_is_always_zero() {
        for requested in [0, 1, 50, 10_000, -5] {
            assert_eq!(clamp_order_quantity(requested, 0), 0);
            assert_eq!(clamp_order_quantity(requested, -1), 0);
        }
    }

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_order_quantity(150, 100), 100);
        assert_eq!(clamp_order_quantity(100, 100), 100);
        assert_eq!(clamp_order_quantity(42, 100), 42);
        assert_eq!(clamp_order_quantity(0, 100), 0);
        assert_eq!(clamp_order_quantity(-1, 100), 0);
    }

    #[test]
    fn test_clamp_floors_fractions() {
        assert_eq!(clamp_order_quantity(dec!(99.99), 100), 99);
        assert_eq!(clamp_order_quantity(dec!(0.5), 100), 0);
        assert_eq!(clamp_order_quantity(dec!(-0.5), 100), 0);
        let enormous = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
        assert_eq!(clamp_order_quantity(enormous, 100), 100);
    }

    #[test]
    fn test_first_stocked_tier_defaults_to_one() {
        let mut qty = OrderQuantity::new();
        assert_eq!(qty.on_tier_selected(500), 1);
        assert!(qty.is_set());
    }

    #[test]
    fn test_first_empty_tier_stays_unset() {
        let mut qty = OrderQuantity::new();
        assert_eq!(qty.on_tier_selected(0), 0);
        assert!(!qty.is_set());

        // Still counts as "no prior value" once stock shows up
        assert_eq!(qty.on_tier_selected(20), 1);
    }

    #[test]
    fn test_tier_change_clamps_down() {
        let mut qty = OrderQuantity::new();
        qty.on_tier_selected(500);
        assert_eq!(qty.request(250, 500), 250);

        assert_eq!(qty.on_tier_selected(100), 100);
        // Going back to a bigger tier does not restore 250
        assert_eq!(qty.on_tier_selected(500), 100);
    }

    #[test]
    fn test_explicit_zero_is_never_raised() {
        let mut qty = OrderQuantity::new();
        qty.on_tier_selected(100);
        assert_eq!(qty.request(0, 100), 0);

        assert_eq!(qty.on_tier_selected(500), 0);
        assert_eq!(qty.on_tier_selected(1), 0);
    }

    #[test]
    fn test_sold_out_tier_forces_zero() {
        let mut qty = OrderQuantity::with_value(30);
        assert_eq!(qty.on_tier_selected(0), 0);
        assert_eq!(qty.on_tier_selected(100), 0);
    }

    #[test]
    fn test_request_uses_keystroke_input() {
        let mut qty = OrderQuantity::new();
        qty.on_tier_selected(100);
        assert_eq!(qty.request(parse_quantity_input("12.7"), 100), 12);
        assert_eq!(qty.request(parse_quantity_input("5000"), 100), 100);
        assert_eq!(qty.request(parse_quantity_input("abc"), 100), 0);
        assert_eq!(qty.value(), 0);
    }
}
