//! # Selection Resolution
//!
//! Turns the ids a session has stored into the options that will actually be
//! priced.
//!
//! ## Fallback Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stored id          catalogue            resolved                      │
//! │  ─────────          ─────────            ────────                      │
//! │  material = 2   →   [#1, #2, #3]    →   #2                             │
//! │  material = 99  →   [#1, #2, #3]    →   #1   (stale id: first entry)   │
//! │  material = ∅   →   [#1, #2, #3]    →   #1   (nothing chosen yet)      │
//! │  color = 4      →   []              →   none (color is optional)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The configurator must always have something selected and priced, so a
//! stale id is never an error. [`ResolvedSelection::fallbacks`] reports which
//! categories were substituted, for callers that want to log it.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::modifier::PriceModifier;
use crate::types::{
    Catalogue, CatalogueEntry, ColorOption, ModifierOption, OptionCategory, OptionId,
    QuantityTier, SizeOption,
};

// =============================================================================
// Selection Ids
// =============================================================================

/// The ids currently chosen in a session, one slot per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SelectionIds {
    pub size: Option<OptionId>,
    pub material: Option<OptionId>,
    pub finish: Option<OptionId>,
    pub print_side: Option<OptionId>,
    pub production_speed: Option<OptionId>,
    pub quantity_tier: Option<OptionId>,
    pub color: Option<OptionId>,
}

impl SelectionIds {
    pub fn get(&self, category: OptionCategory) -> Option<OptionId> {
        match category {
            OptionCategory::Size => self.size,
            OptionCategory::Material => self.material,
            OptionCategory::Finish => self.finish,
            OptionCategory::PrintSide => self.print_side,
            OptionCategory::ProductionSpeed => self.production_speed,
            OptionCategory::QuantityTier => self.quantity_tier,
            OptionCategory::Color => self.color,
        }
    }

    pub fn set(&mut self, category: OptionCategory, id: Option<OptionId>) {
        let slot = match category {
            OptionCategory::Size => &mut self.size,
            OptionCategory::Material => &mut self.material,
            OptionCategory::Finish => &mut self.finish,
            OptionCategory::PrintSide => &mut self.print_side,
            OptionCategory::ProductionSpeed => &mut self.production_speed,
            OptionCategory::QuantityTier => &mut self.quantity_tier,
            OptionCategory::Color => &mut self.color,
        };
        *slot = id;
    }

    /// The ids of the options a resolved selection actually uses.
    pub fn from_selection(selection: &Selection<'_>) -> Self {
        SelectionIds {
            size: Some(selection.size.id),
            material: Some(selection.material.id),
            finish: Some(selection.finish.id),
            print_side: Some(selection.print_side.id),
            production_speed: Some(selection.production_speed.id),
            quantity_tier: Some(selection.quantity_tier.id),
            color: selection.color.map(|c| c.id),
        }
    }
}

// =============================================================================
// Selection
// =============================================================================

/// One chosen option per category, borrowed from a catalogue snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection<'a> {
    pub size: &'a SizeOption,
    pub material: &'a ModifierOption,
    pub finish: &'a ModifierOption,
    pub print_side: &'a ModifierOption,
    pub production_speed: &'a ModifierOption,
    pub quantity_tier: &'a QuantityTier,
    pub color: Option<&'a ColorOption>,
}

impl Selection<'_> {
    /// All six factors that scale the base price, color defaulting to 1.
    pub fn modifiers(&self) -> [PriceModifier; 6] {
        let color = match self.color {
            Some(color) => color.price_modifier,
            None => PriceModifier::IDENTITY,
        };

        [
            self.material.price_modifier,
            self.finish.price_modifier,
            self.print_side.price_modifier,
            self.production_speed.price_modifier,
            self.quantity_tier.price_modifier,
            color,
        ]
    }

    /// Stock ceiling of the selected tier.
    #[inline]
    pub fn max_stock(&self) -> i64 {
        self.quantity_tier.quantity
    }
}

/// A selection plus the categories whose stored id could not be honoured.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSelection<'a> {
    pub selection: Selection<'a>,
    fallbacks: Vec<OptionCategory>,
}

impl<'a> ResolvedSelection<'a> {
    /// Categories where a stored id was stale and the first option was used.
    ///
    /// A category with no stored id is not a fallback.
    pub fn fallbacks(&self) -> &[OptionCategory] {
        &self.fallbacks
    }

    pub fn into_selection(self) -> Selection<'a> {
        self.selection
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolves stored ids against a catalogue, falling back to each list's
/// first entry. Returns `None` only when a required list is empty.
///
/// ## Example
/// ```rust
/// use boxcraft_core::selection::{resolve_selection, SelectionIds};
/// use boxcraft_core::types::{Catalogue, OptionId};
///
/// let catalogue = Catalogue::default();
/// assert!(resolve_selection(&catalogue, &SelectionIds::default()).is_none());
/// ```
pub fn resolve_selection<'a>(
    catalogue: &'a Catalogue,
    current: &SelectionIds,
) -> Option<Selection<'a>> {
    resolve_selection_detailed(catalogue, current).map(ResolvedSelection::into_selection)
}

/// Like [`resolve_selection`], also reporting which stored ids were stale.
pub fn resolve_selection_detailed<'a>(
    catalogue: &'a Catalogue,
    current: &SelectionIds,
) -> Option<ResolvedSelection<'a>> {
    let (size, a) = pick_entry(&catalogue.sizes, current.size)?;
    let (material, b) = pick_entry(&catalogue.materials, current.material)?;
    let (finish, c) = pick_entry(&catalogue.finishes, current.finish)?;
    let (print_side, d) = pick_entry(&catalogue.print_sides, current.print_side)?;
    let (production_speed, e) =
        pick_entry(&catalogue.production_speeds, current.production_speed)?;
    let (quantity_tier, f) = pick_entry(&catalogue.quantity_tiers, current.quantity_tier)?;
    let (color, g) = match pick_entry(&catalogue.colors, current.color) {
        Some((color, fell_back)) => (Some(color), fell_back),
        None => (None, current.color.is_some()),
    };

    // Only a stored id that went missing counts; an empty slot is a fresh session
    let fallbacks = OptionCategory::ALL
        .into_iter()
        .zip([a, b, c, d, e, f, g])
        .filter(|(category, fell_back)| *fell_back && current.get(*category).is_some())
        .map(|(category, _)| category)
        .collect();

    Some(ResolvedSelection {
        selection: Selection {
            size,
            material,
            finish,
            print_side,
            production_speed,
            quantity_tier,
            color,
        },
        fallbacks,
    })
}

/// Finds `wanted` in `list`, else the first entry. The flag is true when the
/// first entry was used because `wanted` was absent or unknown.
fn pick_entry<T: CatalogueEntry>(list: &[T], wanted: Option<OptionId>) -> Option<(&T, bool)> {
    if let Some(found) = wanted.and_then(|id| list.iter().find(|entry| entry.id() == id)) {
        return Some((found, false));
    }
    list.first().map(|first| (first, true))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalogue;

    #[test]
    fn test_matching_ids_are_used() {
        let catalogue = sample_catalogue();
        let ids = SelectionIds {
            material: Some(OptionId(2)),
            quantity_tier: Some(OptionId(3)),
            color: Some(OptionId(2)),
            ..SelectionIds::default()
        };

        let selection = resolve_selection(&catalogue, &ids).unwrap();
        assert_eq!(selection.material.id, OptionId(2));
        assert_eq!(selection.quantity_tier.id, OptionId(3));
        assert_eq!(selection.color.map(|c| c.id), Some(OptionId(2)));
        assert_eq!(selection.size.id, OptionId(1));
    }

    #[test]
    fn test_stale_id_falls_back_to_first() {
        let catalogue = sample_catalogue();
        let ids = SelectionIds {
            material: Some(OptionId(99)),
            ..SelectionIds::default()
        };

        let resolved = resolve_selection_detailed(&catalogue, &ids).unwrap();
        assert_eq!(resolved.selection.material, &catalogue.materials[0]);
        assert_eq!(resolved.fallbacks(), &[OptionCategory::Material]);
    }

    #[test]
    fn test_unset_ids_are_not_reported_as_fallbacks() {
        let catalogue = sample_catalogue();
        let resolved = resolve_selection_detailed(&catalogue, &SelectionIds::default()).unwrap();
        assert!(resolved.fallbacks().is_empty());
        assert_eq!(resolved.selection.color.map(|c| c.id), Some(OptionId(1)));
    }

    #[test]
    fn test_empty_color_catalogue_resolves_to_none() {
        let mut catalogue = sample_catalogue();
        catalogue.colors.clear();
        let ids = SelectionIds {
            color: Some(OptionId(4)),
            ..SelectionIds::default()
        };

        let resolved = resolve_selection_detailed(&catalogue, &ids).unwrap();
        assert!(resolved.selection.color.is_none());
        assert_eq!(resolved.selection.modifiers()[5], PriceModifier::IDENTITY);
        assert_eq!(resolved.fallbacks(), &[OptionCategory::Color]);
    }

    #[test]
    fn test_empty_required_category_cannot_resolve() {
        let mut catalogue = sample_catalogue();
        catalogue.finishes.clear();
        assert!(resolve_selection(&catalogue, &SelectionIds::default()).is_none());
    }

    #[test]
    fn test_zero_stock_tier_still_resolves() {
        let catalogue = sample_catalogue();
        let ids = SelectionIds {
            quantity_tier: Some(OptionId(7)),
            ..SelectionIds::default()
        };

        // Tier 7 is gone; fall back to the first tier, which has no stock
        let selection = resolve_selection(&catalogue, &ids).unwrap();
        assert_eq!(selection.quantity_tier, &catalogue.quantity_tiers[0]);
        assert_eq!(selection.max_stock(), 0);
    }

    #[test]
    fn test_ids_from_selection() {
        let catalogue = sample_catalogue();
        let selection = resolve_selection(&catalogue, &SelectionIds::default()).unwrap();
        let ids = SelectionIds::from_selection(&selection);
        assert_eq!(ids.get(OptionCategory::Size), Some(OptionId(1)));
        assert_eq!(ids.get(OptionCategory::QuantityTier), Some(OptionId(1)));

        let mut changed = ids;
        changed.set(OptionCategory::Finish, Some(OptionId(2)));
        assert_eq!(changed.finish, Some(OptionId(2)));
        assert_ne!(changed, ids);
    }
}
