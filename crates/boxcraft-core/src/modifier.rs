//! # Price Modifiers
//!
//! Every chosen option scales the base price by a multiplicative factor.
//! Factors are exact decimals so `1.10 × 1.05` is `1.155`, not
//! `1.1550000000000002`, and the product is the same in any order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// A multiplicative price factor (> 0 once validated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceModifier(Decimal);

impl PriceModifier {
    /// The neutral factor, used when a product has no color catalogue.
    pub const IDENTITY: PriceModifier = PriceModifier(Decimal::ONE);

    #[inline]
    pub const fn new(value: Decimal) -> Self {
        PriceModifier(value)
    }

    #[inline]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Modifiers at or below zero are rejected at data-entry time.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Multiplies all factors together without any intermediate rounding.
    ///
    /// ## Example
    /// ```rust
    /// use boxcraft_core::modifier::PriceModifier;
    /// use rust_decimal::Decimal;
    ///
    /// let factors = [Decimal::new(110, 2), Decimal::new(105, 2)].map(PriceModifier::new);
    /// assert_eq!(PriceModifier::product(factors).value(), Decimal::new(11550, 4));
    /// assert_eq!(PriceModifier::product([]), PriceModifier::IDENTITY);
    /// ```
    pub fn product<I>(factors: I) -> PriceModifier
    where
        I: IntoIterator<Item = PriceModifier>,
    {
        factors.into_iter().fold(PriceModifier::IDENTITY, |acc, m| acc * m)
    }
}

impl Mul for PriceModifier {
    type Output = PriceModifier;

    /// Saturates instead of panicking on overflow.
    fn mul(self, other: PriceModifier) -> PriceModifier {
        PriceModifier(self.0.checked_mul(other.0).unwrap_or(Decimal::MAX))
    }
}

impl fmt::Display for PriceModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "×{}", self.0.normalize())
    }
}
