//! # Catalogue Types
//!
//! The option catalogue a box product is configured from.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalogue                                       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   SizeOption    │   │ ModifierOption  │   │  QuantityTier   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  w × h × d mm   │   │  material       │   │  quantity       │       │
//! │  │  base_price     │   │  finish         │   │  (stock ceiling)│       │
//! │  └─────────────────┘   │  print side     │   │  modifier       │       │
//! │                        │  prod. speed    │   └─────────────────┘       │
//! │  ┌─────────────────┐   │  modifier       │                             │
//! │  │   ColorOption   │   └─────────────────┘                             │
//! │  │  hex, modifier  │   (optional category)                             │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every list arrives already ordered by `position`; nothing here re-sorts.
//! The storage layer owns these records, the engine only reads a snapshot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::modifier::PriceModifier;
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Stable integer id of a catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct OptionId(pub i64);

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The option categories a configuration is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OptionCategory {
    Size,
    Material,
    Finish,
    PrintSide,
    ProductionSpeed,
    QuantityTier,
    /// The only optional category.
    Color,
}

impl OptionCategory {
    /// All categories in configurator display order.
    pub const ALL: [OptionCategory; 7] = [
        OptionCategory::Size,
        OptionCategory::Material,
        OptionCategory::Finish,
        OptionCategory::PrintSide,
        OptionCategory::ProductionSpeed,
        OptionCategory::QuantityTier,
        OptionCategory::Color,
    ];

    /// Wire name, matching the serde representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OptionCategory::Size => "size",
            OptionCategory::Material => "material",
            OptionCategory::Finish => "finish",
            OptionCategory::PrintSide => "print_side",
            OptionCategory::ProductionSpeed => "production_speed",
            OptionCategory::QuantityTier => "quantity_tier",
            OptionCategory::Color => "color",
        }
    }

    /// Whether a configuration can be priced without this category.
    #[inline]
    pub const fn is_optional(&self) -> bool {
        matches!(self, OptionCategory::Color)
    }
}

/// Human-readable name ("print side"), used in error messages.
impl fmt::Display for OptionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().replace('_', " "))
    }
}

impl FromStr for OptionCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        OptionCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Options
// =============================================================================

/// A box size. Defines the base unit price before any modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SizeOption {
    pub id: OptionId,
    pub label: String,
    pub width_mm: u32,
    pub height_mm: u32,
    pub depth_mm: u32,
    /// Base unit price in cents.
    pub base_price_cents: i64,
    #[serde(default)]
    pub position: i32,
}

impl SizeOption {
    #[inline]
    pub fn base_price(&self) -> Money {
        Money::from_cents(self.base_price_cents)
    }
}

/// Shared shape of materials, finishes, print sides and production speeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ModifierOption {
    pub id: OptionId,
    pub label: String,
    #[serde(default)]
    pub description: Option<String>,
    #[ts(as = "String")]
    pub price_modifier: PriceModifier,
    #[serde(default)]
    pub position: i32,
}

/// A stock tier: how many units can be ordered, and at what modifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuantityTier {
    pub id: OptionId,
    pub label: String,
    /// Maximum units available at this tier, not an ordered amount.
    pub quantity: i64,
    #[ts(as = "String")]
    pub price_modifier: PriceModifier,
    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ColorOption {
    pub id: OptionId,
    pub label: String,
    #[serde(default)]
    pub hex: Option<String>,
    #[ts(as = "String")]
    pub price_modifier: PriceModifier,
    #[serde(default)]
    pub position: i32,
}

/// Uniform access to the id of any catalogue entry.
pub trait CatalogueEntry {
    fn id(&self) -> OptionId;
}

macro_rules! impl_catalogue_entry {
    ($($ty:ty),+) => {
        $(
            impl CatalogueEntry for $ty {
                #[inline]
                fn id(&self) -> OptionId {
                    self.id
                }
            }
        )+
    };
}

impl_catalogue_entry!(SizeOption, ModifierOption, QuantityTier, ColorOption);

// =============================================================================
// Catalogue
// =============================================================================

/// Snapshot of every option list of one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Catalogue {
    pub sizes: Vec<SizeOption>,
    pub materials: Vec<ModifierOption>,
    pub finishes: Vec<ModifierOption>,
    pub print_sides: Vec<ModifierOption>,
    pub production_speeds: Vec<ModifierOption>,
    pub quantity_tiers: Vec<QuantityTier>,
    /// Empty when the product has no color catalogue.
    #[serde(default)]
    pub colors: Vec<ColorOption>,
}

impl Catalogue {
    /// Decodes a JSON snapshot as exported by the storage layer.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of entries in a category.
    pub fn len_of(&self, category: OptionCategory) -> usize {
        match category {
            OptionCategory::Size => self.sizes.len(),
            OptionCategory::Material => self.materials.len(),
            OptionCategory::Finish => self.finishes.len(),
            OptionCategory::PrintSide => self.print_sides.len(),
            OptionCategory::ProductionSpeed => self.production_speeds.len(),
            OptionCategory::QuantityTier => self.quantity_tiers.len(),
            OptionCategory::Color => self.colors.len(),
        }
    }

    /// The modifier-shaped list for material, finish, print side or speed.
    pub fn modifier_options(&self, category: OptionCategory) -> Option<&[ModifierOption]> {
        match category {
            OptionCategory::Material => Some(&self.materials),
            OptionCategory::Finish => Some(&self.finishes),
            OptionCategory::PrintSide => Some(&self.print_sides),
            OptionCategory::ProductionSpeed => Some(&self.production_speeds),
            _ => None,
        }
    }

    /// Whether `id` exists in `category`.
    pub fn contains(&self, category: OptionCategory, id: OptionId) -> bool {
        fn has<T: CatalogueEntry>(list: &[T], id: OptionId) -> bool {
            list.iter().any(|entry| entry.id() == id)
        }

        match category {
            OptionCategory::Size => has(&self.sizes, id),
            OptionCategory::QuantityTier => has(&self.quantity_tiers, id),
            OptionCategory::Color => has(&self.colors, id),
            other => self
                .modifier_options(other)
                .is_some_and(|list| has(list, id)),
        }
    }

    /// First required category with no entries, if any.
    pub fn first_empty_required(&self) -> Option<OptionCategory> {
        OptionCategory::ALL
            .into_iter()
            .filter(|c| !c.is_optional())
            .find(|c| self.len_of(*c) == 0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in OptionCategory::ALL {
            assert_eq!(category.as_str().parse::<OptionCategory>().unwrap(), category);
        }
        assert_eq!(
            "Print Side".parse::<OptionCategory>().unwrap(),
            OptionCategory::PrintSide
        );
        assert!("lid".parse::<OptionCategory>().is_err());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(OptionCategory::ProductionSpeed.to_string(), "production speed");
        assert_eq!(OptionCategory::Size.to_string(), "size");
    }

    #[test]
    fn test_only_color_is_optional() {
        let optional: Vec<_> = OptionCategory::ALL
            .into_iter()
            .filter(OptionCategory::is_optional)
            .collect();
        assert_eq!(optional, vec![OptionCategory::Color]);
    }

    #[test]
    fn test_catalogue_from_json() {
        let json = r#"{
            "sizes": [{"id": 1, "label": "Small", "width_mm": 100, "height_mm": 60,
                       "depth_mm": 40, "base_price_cents": 185, "position": 0}],
            "materials": [{"id": 1, "label": "Kraft", "price_modifier": "1.10"}],
            "finishes": [{"id": 1, "label": "Matte", "price_modifier": "1.00"}],
            "print_sides": [{"id": 1, "label": "Outside", "price_modifier": "1.05"}],
            "production_speeds": [{"id": 1, "label": "Express", "price_modifier": "1.20"}],
            "quantity_tiers": [{"id": 1, "label": "Up to 500", "quantity": 500,
                                "price_modifier": "0.95"}]
        }"#;

        let catalogue = Catalogue::from_json(json).unwrap();
        assert_eq!(catalogue.sizes[0].base_price(), Money::from_cents(185));
        assert!(catalogue.colors.is_empty());
        assert!(catalogue.contains(OptionCategory::Finish, OptionId(1)));
        assert!(!catalogue.contains(OptionCategory::Color, OptionId(1)));
        assert_eq!(catalogue.first_empty_required(), None);
        assert_eq!(catalogue.quantity_tiers[0].quantity, 500);
    }

    #[test]
    fn test_catalogue_from_bad_json() {
        let err = Catalogue::from_json("{\"sizes\": 3}").unwrap_err();
        assert!(matches!(err, CoreError::Snapshot(_)));
    }

    #[test]
    fn test_first_empty_required() {
        let catalogue = Catalogue::default();
        assert_eq!(catalogue.first_empty_required(), Some(OptionCategory::Size));
    }
}
