//! Shared fixtures for unit tests.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::modifier::PriceModifier;
use crate::types::{
    Catalogue, ColorOption, ModifierOption, OptionId, QuantityTier, SizeOption,
};

pub(crate) fn modifier_option(id: i64, label: &str, modifier: Decimal) -> ModifierOption {
    ModifierOption {
        id: OptionId(id),
        label: label.to_string(),
        description: None,
        price_modifier: PriceModifier::new(modifier),
        position: id as i32,
    }
}

pub(crate) fn tier(id: i64, quantity: i64, modifier: Decimal) -> QuantityTier {
    QuantityTier {
        id: OptionId(id),
        label: format!("Up to {}", quantity),
        quantity,
        price_modifier: PriceModifier::new(modifier),
        position: id as i32,
    }
}

/// Two of everything, with a sold-out tier listed first.
pub(crate) fn sample_catalogue() -> Catalogue {
    Catalogue {
        sizes: vec![
            SizeOption {
                id: OptionId(1),
                label: "Mailer S".to_string(),
                width_mm: 180,
                height_mm: 120,
                depth_mm: 50,
                base_price_cents: 185,
                position: 0,
            },
            SizeOption {
                id: OptionId(2),
                label: "Mailer L".to_string(),
                width_mm: 350,
                height_mm: 250,
                depth_mm: 100,
                base_price_cents: 420,
                position: 1,
            },
        ],
        materials: vec![
            modifier_option(1, "Kraft", dec!(1.10)),
            modifier_option(2, "White E-flute", dec!(1.25)),
        ],
        finishes: vec![
            modifier_option(1, "Matte", dec!(1.00)),
            modifier_option(2, "Gloss laminate", dec!(1.15)),
        ],
        print_sides: vec![
            modifier_option(1, "Outside only", dec!(1.05)),
            modifier_option(2, "Inside and outside", dec!(1.30)),
        ],
        production_speeds: vec![
            modifier_option(1, "Express", dec!(1.20)),
            modifier_option(2, "Standard", dec!(1.00)),
        ],
        quantity_tiers: vec![
            tier(1, 0, dec!(1.00)),
            tier(2, 100, dec!(0.95)),
            tier(3, 500, dec!(0.90)),
        ],
        colors: vec![
            ColorOption {
                id: OptionId(1),
                label: "Natural".to_string(),
                hex: Some("#C8A27A".to_string()),
                price_modifier: PriceModifier::IDENTITY,
                position: 0,
            },
            ColorOption {
                id: OptionId(2),
                label: "Gold foil".to_string(),
                hex: Some("#D4AF37".to_string()),
                price_modifier: PriceModifier::new(dec!(1.10)),
                position: 1,
            },
        ],
    }
}
