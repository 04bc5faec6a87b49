//! # Validation Module
//!
//! Data-entry rules for catalogue entries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Admin forms                                                  │
//! │  ├── parse_base_price / parse_price_modifier  ← THIS MODULE            │
//! │  └── user-facing messages ("price modifier must be positive")          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Snapshot load                                                 │
//! │  └── validate_catalogue                       ← THIS MODULE            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine                                                │
//! │  └── assumes well-formed input, never re-checks                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use boxcraft_core::validation::{parse_base_price, parse_price_modifier};
//!
//! assert_eq!(parse_base_price("1.85").unwrap().cents(), 185);
//! assert!(parse_price_modifier("0").is_err());
//! ```

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::error::ValidationError;
use crate::modifier::PriceModifier;
use crate::money::{Money, MONEY_DECIMALS};
use crate::types::{Catalogue, CatalogueEntry, OptionCategory};
use crate::{MAX_DIMENSION_MM, MAX_LABEL_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a display label.
///
/// ## Rules
/// - Must not be empty
/// - At most MAX_LABEL_LENGTH (100) characters
pub fn validate_label(field: &str, label: &str) -> ValidationResult<()> {
    let label = label.trim();

    if label.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max: MAX_LABEL_LENGTH,
        });
    }

    Ok(())
}

/// Validates a color swatch in `#RGB` or `#RRGGBB` form.
///
/// ## Example
/// ```rust
/// use boxcraft_core::validation::validate_hex_color;
///
/// assert!(validate_hex_color("#D4AF37").is_ok());
/// assert!(validate_hex_color("#fff").is_ok());
/// assert!(validate_hex_color("D4AF37").is_err());
/// assert!(validate_hex_color("#GGGGGG").is_err());
/// ```
pub fn validate_hex_color(hex: &str) -> ValidationResult<()> {
    let digits = hex.strip_prefix('#').ok_or_else(|| ValidationError::InvalidFormat {
        field: "hex".to_string(),
        reason: "must start with '#'".to_string(),
    })?;

    if !matches!(digits.len(), 3 | 6) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::InvalidFormat {
            field: "hex".to_string(),
            reason: "must be 3 or 6 hexadecimal digits".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a base price typed in major units.
///
/// ## Rules
/// - Must be a number
/// - Must be non-negative (zero is a free sample size)
/// - At most 2 decimal places
pub fn parse_base_price(input: &str) -> ValidationResult<Money> {
    let amount = parse_decimal("base price", input)?;

    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::OutOfRange {
            field: "base price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    if amount.normalize().scale() > MONEY_DECIMALS {
        return Err(ValidationError::InvalidFormat {
            field: "base price".to_string(),
            reason: format!("must have at most {} decimal places", MONEY_DECIMALS),
        });
    }

    Ok(Money::from_decimal(amount))
}

/// Parses a price modifier.
///
/// ## Rules
/// - Must be a number
/// - Must be strictly positive: a zero modifier would make the option free,
///   a negative one would make the price negative
///
/// ## Example
/// ```rust
/// use boxcraft_core::validation::parse_price_modifier;
///
/// assert!(parse_price_modifier("1.05").is_ok());
/// assert!(parse_price_modifier("0").is_err());
/// assert!(parse_price_modifier("-1").is_err());
/// assert!(parse_price_modifier("fast").is_err());
/// ```
pub fn parse_price_modifier(input: &str) -> ValidationResult<PriceModifier> {
    let value = parse_decimal("price modifier", input)?;
    let modifier = PriceModifier::new(value);
    validate_price_modifier(modifier)?;
    Ok(modifier)
}

fn validate_price_modifier(modifier: PriceModifier) -> ValidationResult<()> {
    if !modifier.is_valid() {
        return Err(ValidationError::MustBePositive {
            field: "price modifier".to_string(),
        });
    }
    Ok(())
}

fn parse_decimal(field: &str, input: &str) -> ValidationResult<Decimal> {
    let input = input.trim();

    if input.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    input
        .parse::<Decimal>()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a number".to_string(),
        })
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a box dimension.
///
/// ## Rules
/// - Must be positive
/// - At most MAX_DIMENSION_MM (5000)
pub fn validate_dimension_mm(field: &str, value: i64) -> ValidationResult<u32> {
    if value <= 0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    if value > i64::from(MAX_DIMENSION_MM) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 1,
            max: i64::from(MAX_DIMENSION_MM),
        });
    }

    Ok(value as u32)
}

/// Validates the stock ceiling of a quantity tier. Zero means sold out.
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Catalogue Validator
// =============================================================================

/// Checks every entry of a snapshot against the data-entry rules, plus id
/// uniqueness within each category. Reports the first problem found.
pub fn validate_catalogue(catalogue: &Catalogue) -> ValidationResult<()> {
    check_unique_ids(OptionCategory::Size, &catalogue.sizes)?;
    for size in &catalogue.sizes {
        validate_label("size label", &size.label)?;
        validate_dimension_mm("width", i64::from(size.width_mm))?;
        validate_dimension_mm("height", i64::from(size.height_mm))?;
        validate_dimension_mm("depth", i64::from(size.depth_mm))?;
        if size.base_price().is_negative() {
            return Err(ValidationError::OutOfRange {
                field: "base price".to_string(),
                min: 0,
                max: i64::MAX,
            });
        }
    }

    for category in [
        OptionCategory::Material,
        OptionCategory::Finish,
        OptionCategory::PrintSide,
        OptionCategory::ProductionSpeed,
    ] {
        let options = catalogue.modifier_options(category).unwrap_or_default();
        check_unique_ids(category, options)?;
        for option in options {
            validate_label(&format!("{} label", category), &option.label)?;
            validate_price_modifier(option.price_modifier)?;
        }
    }

    check_unique_ids(OptionCategory::QuantityTier, &catalogue.quantity_tiers)?;
    for tier in &catalogue.quantity_tiers {
        validate_label("quantity tier label", &tier.label)?;
        validate_stock_quantity(tier.quantity)?;
        validate_price_modifier(tier.price_modifier)?;
    }

    check_unique_ids(OptionCategory::Color, &catalogue.colors)?;
    for color in &catalogue.colors {
        validate_label("color label", &color.label)?;
        if let Some(hex) = &color.hex {
            validate_hex_color(hex)?;
        }
        validate_price_modifier(color.price_modifier)?;
    }

    Ok(())
}

fn check_unique_ids<T: CatalogueEntry>(
    category: OptionCategory,
    entries: &[T],
) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(ValidationError::Duplicate {
                field: format!("{} id", category),
                value: entry.id().to_string(),
            });
        }
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
