//! # Pricing
//!
//! Unit price and subtotal of one configuration.
//!
//! ## Formula
//! ```text
//! modifier   = material × finish × print side × speed × tier × color(=1 if none)
//! unit_price = round2(size.base_price × modifier)
//! subtotal   = round2(unit_price × order_quantity)
//! ```
//!
//! Rounding is half-up and happens exactly twice: on the unit price and on
//! the subtotal. Because the unit price is already whole cents, the subtotal
//! step is an exact integer product.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::modifier::PriceModifier;
use crate::money::Money;
use crate::selection::Selection;

/// The priced result of one configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PriceQuote {
    pub unit_price: Money,
    pub subtotal: Money,
    /// Combined, unrounded modifier applied to the base price.
    #[ts(as = "String")]
    pub modifier: PriceModifier,
    pub order_quantity: i64,
}

/// Prices a resolved selection for `order_quantity` units.
///
/// Total over its inputs: no lookups, no errors, no side effects.
/// Negative quantities price as zero.
///
/// ## Example
/// ```rust
/// use boxcraft_core::pricing::price_for;
/// use boxcraft_core::modifier::PriceModifier;
/// use boxcraft_core::money::Money;
/// use rust_decimal::Decimal;
///
/// let factors = [110, 100, 105, 120, 95, 100]
///     .map(|pct| PriceModifier::new(Decimal::new(pct, 2)));
/// let quote = price_for(Money::from_cents(185), factors, 100);
/// assert_eq!(quote.unit_price.cents(), 244);
/// assert_eq!(quote.subtotal.cents(), 24400);
/// ```
pub fn compute_price(selection: &Selection<'_>, order_quantity: i64) -> PriceQuote {
    price_for(selection.size.base_price(), selection.modifiers(), order_quantity)
}

/// The arithmetic behind [`compute_price`], over any set of factors.
pub fn price_for<I>(base_price: Money, modifiers: I, order_quantity: i64) -> PriceQuote
where
    I: IntoIterator<Item = PriceModifier>,
{
    let modifier = PriceModifier::product(modifiers);
    let unit_price = base_price.scale(modifier.value());
    let order_quantity = order_quantity.max(0);

    PriceQuote {
        unit_price,
        subtotal: unit_price.multiply_quantity(order_quantity),
        modifier,
        order_quantity,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::{resolve_selection, SelectionIds};
    use crate::testing::sample_catalogue;
    use crate::types::OptionId;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn m(value: Decimal) -> PriceModifier {
        PriceModifier::new(value)
    }

    #[test]
    fn test_worked_example() {
        let catalogue = sample_catalogue();
        let ids = SelectionIds {
            quantity_tier: Some(OptionId(2)),
            ..SelectionIds::default()
        };
        let selection = resolve_selection(&catalogue, &ids).unwrap();

        let quote = compute_price(&selection, 100);
        assert_eq!(quote.modifier.value(), dec!(1.3167));
        assert_eq!(quote.unit_price, Money::from_cents(244));
        assert_eq!(quote.subtotal, Money::from_cents(24400));
        assert_eq!(quote.order_quantity, 100);
    }

    #[test]
    fn test_color_modifier_applies() {
        let catalogue = sample_catalogue();
        let ids = SelectionIds {
            quantity_tier: Some(OptionId(2)),
            color: Some(OptionId(2)),
            ..SelectionIds::default()
        };
        let selection = resolve_selection(&catalogue, &ids).unwrap();

        // 185 × 1.44837 = 267.94845 cents
        let quote = compute_price(&selection, 3);
        assert_eq!(quote.unit_price.cents(), 268);
        assert_eq!(quote.subtotal.cents(), 804);
    }

    #[test]
    fn test_missing_color_is_neutral() {
        let mut catalogue = sample_catalogue();
        let ids = SelectionIds {
            quantity_tier: Some(OptionId(2)),
            ..SelectionIds::default()
        };
        let with_natural = compute_price(&resolve_selection(&catalogue, &ids).unwrap(), 10);

        catalogue.colors.clear();
        let without = compute_price(&resolve_selection(&catalogue, &ids).unwrap(), 10);

        assert_eq!(with_natural, without);
    }

    #[test]
    fn test_modifier_order_does_not_matter() {
        let base = Money::from_cents(999);
        let factors = [m(dec!(1.07)), m(dec!(0.93)), m(dec!(1.333)), m(dec!(1.05))];
        let mut reversed = factors;
        reversed.reverse();

        assert_eq!(price_for(base, factors, 7), price_for(base, reversed, 7));
    }

    #[test]
    fn test_rounding_only_at_the_end() {
        // Rounding each step would give 100 → 101 → 102; the exact product is 101.0025
        let base = Money::from_cents(100);
        let quote = price_for(base, [m(dec!(1.005)), m(dec!(1.005))], 1);
        assert_eq!(quote.unit_price.cents(), 101);
    }

    #[test]
    fn test_subtotal_is_unit_price_times_quantity() {
        let base = Money::from_cents(333);
        for qty in [0, 1, 2, 17, 1000] {
            let quote = price_for(base, [m(dec!(1.115))], qty);
            assert_eq!(quote.subtotal, quote.unit_price.multiply_quantity(qty));
        }
    }

    #[test]
    fn test_zero_quantity_and_free_size() {
        let quote = price_for(Money::from_cents(185), [m(dec!(1.2))], 0);
        assert!(quote.subtotal.is_zero());
        assert_eq!(quote.unit_price.cents(), 222);

        let free = price_for(Money::zero(), [m(dec!(3.5))], 50);
        assert!(free.unit_price.is_zero());
        assert!(free.subtotal.is_zero());
    }

    #[test]
    fn test_negative_quantity_prices_as_zero() {
        let quote = price_for(Money::from_cents(185), [], -4);
        assert_eq!(quote.order_quantity, 0);
        assert!(quote.subtotal.is_zero());
        assert_eq!(quote.modifier, PriceModifier::IDENTITY);
    }
}
