//! # Configurator Session
//!
//! The in-memory state of one person designing one box: a catalogue
//! snapshot, the ids they picked, and their order quantity.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  new(catalogue) ──► ids = ∅ ──► resolve (index 0) ──► tier default     │
//! │                                                                         │
//! │  select(size/material/…)  ──► store id ──► re-price                    │
//! │  select(quantity tier)    ──► store id ──► re-clamp ──► re-price       │
//! │  set_order_quantity(n)    ──► clamp to tier stock ──► re-price         │
//! │  replace_catalogue(new)   ──► stale ids fall back ──► re-clamp if the  │
//! │                               resolved tier or its stock changed       │
//! │                                                                         │
//! │  quote() is recomputed from scratch every time; nothing is cached.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;

use crate::pricing::{compute_price, PriceQuote};
use crate::quantity::OrderQuantity;
use crate::selection::{
    resolve_selection, resolve_selection_detailed, ResolvedSelection, Selection, SelectionIds,
};
use crate::types::{Catalogue, OptionCategory, OptionId};

/// One configurator session.
#[derive(Debug, Clone)]
pub struct Configurator {
    catalogue: Catalogue,
    ids: SelectionIds,
    quantity: OrderQuantity,
}

impl Configurator {
    /// Starts a session on the first option of every category.
    pub fn new(catalogue: Catalogue) -> Self {
        Self::restore(catalogue, SelectionIds::default(), OrderQuantity::new())
    }

    /// Resumes a session from stored ids and quantity.
    ///
    /// The stored quantity is re-clamped against whatever tier the ids
    /// resolve to in this catalogue.
    pub fn restore(catalogue: Catalogue, ids: SelectionIds, quantity: OrderQuantity) -> Self {
        let mut session = Configurator {
            catalogue,
            ids,
            quantity,
        };
        session.reclamp_if_tier_changed(None);
        session
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    /// The ids as stored, which may include stale ones.
    pub fn ids(&self) -> &SelectionIds {
        &self.ids
    }

    pub fn order_quantity(&self) -> i64 {
        self.quantity.value()
    }

    pub fn quantity_state(&self) -> OrderQuantity {
        self.quantity
    }

    pub fn selection(&self) -> Option<Selection<'_>> {
        resolve_selection(&self.catalogue, &self.ids)
    }

    pub fn resolved(&self) -> Option<ResolvedSelection<'_>> {
        resolve_selection_detailed(&self.catalogue, &self.ids)
    }

    /// Current price, or `None` while a required category is empty.
    pub fn quote(&self) -> Option<PriceQuote> {
        let selection = self.selection()?;
        Some(compute_price(&selection, self.quantity.value()))
    }

    /// Stores a choice. Returns whether the order quantity was re-clamped
    /// because the resolved quantity tier changed.
    pub fn select(&mut self, category: OptionCategory, id: OptionId) -> bool {
        let before = self.resolved_tier();
        self.ids.set(category, Some(id));
        self.reclamp_if_tier_changed(before)
    }

    /// Applies a typed quantity against the current tier's stock.
    pub fn set_order_quantity(&mut self, requested: impl Into<Decimal>) -> i64 {
        let max_stock = self.resolved_tier().map_or(0, |(_, stock)| stock);
        self.quantity.request(requested, max_stock)
    }

    /// Swaps in a fresh catalogue snapshot, keeping the stored ids.
    ///
    /// Returns whether the order quantity was re-clamped.
    pub fn replace_catalogue(&mut self, catalogue: Catalogue) -> bool {
        let before = self.resolved_tier();
        self.catalogue = catalogue;
        self.reclamp_if_tier_changed(before)
    }

    /// Id and stock ceiling of the tier the stored ids resolve to.
    fn resolved_tier(&self) -> Option<(OptionId, i64)> {
        let tier = self.selection()?.quantity_tier;
        Some((tier.id, tier.quantity))
    }

    fn reclamp_if_tier_changed(&mut self, before: Option<(OptionId, i64)>) -> bool {
        match self.resolved_tier() {
            Some((id, stock)) if before != Some((id, stock)) => {
                self.quantity.on_tier_selected(stock);
                true
            }
            _ => false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
