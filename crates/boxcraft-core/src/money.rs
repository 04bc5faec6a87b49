//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  base price (cents) × modifier (exact decimal)                         │
//! │        185          ×   1.3167                  = 243.5895 cents      │
//! │                                                        │               │
//! │                            round half-up ONCE ─────────┘               │
//! │                                                        ▼               │
//! │                                             unit price = 244 cents     │
//! │                                                                         │
//! │  unit price (cents) × order quantity (integer)  → exact, no rounding   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are integer cents; only [`Money::scale`] and
//! [`Money::from_decimal`] ever round.
//!
//! ## Usage
//! ```rust
//! use boxcraft_core::money::Money;
//! use rust_decimal::Decimal;
//!
//! let base = Money::from_cents(185); // $1.85
//! let unit = base.scale(Decimal::new(13167, 4)); // × 1.3167
//! assert_eq!(unit.cents(), 244);
//! assert_eq!(unit.multiply_quantity(100).cents(), 24400);
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Number of decimal places in every displayed amount.
pub const MONEY_DECIMALS: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: a negative base price decodes and is then rejected by
///   validation instead of failing deserialization
/// - **Single field tuple struct**: zero-cost wrapper over i64
/// - **Serializes as a bare integer** so snapshots read `"base_price_cents": 185`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use boxcraft_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from an amount in major units, rounding half-up
    /// to the nearest cent.
    ///
    /// ## Example
    /// ```rust
    /// use boxcraft_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(Money::from_decimal(Decimal::new(2_4359, 4)).cents(), 244);
    /// assert_eq!(Money::from_decimal(Decimal::new(1_005, 3)).cents(), 101);
    /// ```
    pub fn from_decimal(amount: Decimal) -> Self {
        let cents = amount
            .checked_mul(Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::MAX);
        Money(round_to_cents(cents))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the amount in major units as an exact decimal (`185` → `1.85`).
    #[inline]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, MONEY_DECIMALS)
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies by an exact decimal factor and rounds half-up to the cent.
    ///
    /// This is the single rounding step of unit-price computation: the factor
    /// is the full product of all option modifiers, never a pre-rounded one.
    /// Results beyond the i64 range saturate.
    ///
    /// ## Example
    /// ```rust
    /// use boxcraft_core::money::Money;
    /// use rust_decimal::Decimal;
    ///
    /// let base = Money::from_cents(1000);
    /// assert_eq!(base.scale(Decimal::new(1_0005, 4)).cents(), 1001); // 1000.5 → 1001
    /// assert_eq!(base.scale(Decimal::ONE).cents(), 1000);
    /// ```
    pub fn scale(&self, factor: Decimal) -> Money {
        let scaled = Decimal::from(self.0)
            .checked_mul(factor)
            .unwrap_or(Decimal::MAX);
        Money(round_to_cents(scaled))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use boxcraft_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(244);
    /// assert_eq!(unit_price.multiply_quantity(100).cents(), 24400);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }
}

/// Rounds an amount already expressed in cents half-up (away from zero).
fn round_to_cents(cents: Decimal) -> i64 {
    let rounded = cents.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly display. Front ends format with their own locale rules.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
