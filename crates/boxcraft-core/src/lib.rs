//! # boxcraft-core: Configuration Pricing Engine
//!
//! Prices one box configuration at a time: a size, four modifier options, a
//! quantity tier and an optional color, for a requested order quantity.
//! Everything here is a pure function of a catalogue snapshot.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Boxcraft Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Box Designer UI                              │   │
//! │  │    Size ─► Material ─► Finish ─► Print ─► Speed ─► Qty ─► Color │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/configurator                            │   │
//! │  │    getQuote, selectOption, setOrderQuantity, reloadCatalogue    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ boxcraft-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ selection │  │  pricing  │  │ quantity  │  │   │
//! │  │   │ Catalogue │  │  resolve  │  │ PriceQuote│  │  clamp    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO LOGGING • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │                   catalogue snapshot (read-only)                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │              Storage layer (admin console, SQL)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Catalogue entries and option categories
//! - [`money`] - Integer-cent money with a single half-up rounding step
//! - [`modifier`] - Exact decimal price factors
//! - [`selection`] - Resolving stored ids, with fallback to the first option
//! - [`pricing`] - Unit price and subtotal
//! - [`quantity`] - Order quantity clamping against tier stock
//! - [`configurator`] - One interactive session tying the above together
//! - [`validation`] - Data-entry rules for catalogue entries
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use boxcraft_core::{compute_price, resolve_selection, Catalogue, SelectionIds};
//!
//! let catalogue = Catalogue::from_json(r#"{
//!     "sizes": [{"id": 1, "label": "S", "width_mm": 100, "height_mm": 60,
//!                "depth_mm": 40, "base_price_cents": 185}],
//!     "materials": [{"id": 1, "label": "Kraft", "price_modifier": "1.10"}],
//!     "finishes": [{"id": 1, "label": "Matte", "price_modifier": "1.00"}],
//!     "print_sides": [{"id": 1, "label": "Outside", "price_modifier": "1.05"}],
//!     "production_speeds": [{"id": 1, "label": "Express", "price_modifier": "1.20"}],
//!     "quantity_tiers": [{"id": 1, "label": "500", "quantity": 500, "price_modifier": "0.95"}]
//! }"#).unwrap();
//!
//! let selection = resolve_selection(&catalogue, &SelectionIds::default()).unwrap();
//! let quote = compute_price(&selection, 100);
//!
//! assert_eq!(quote.unit_price.cents(), 244);   // $2.44
//! assert_eq!(quote.subtotal.cents(), 24400);   // $244.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod configurator;
pub mod error;
pub mod modifier;
pub mod money;
pub mod pricing;
pub mod quantity;
pub mod selection;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use configurator::Configurator;
pub use error::{CoreError, CoreResult, ValidationError};
pub use modifier::PriceModifier;
pub use money::Money;
pub use pricing::{compute_price, PriceQuote};
pub use quantity::{clamp_order_quantity, OrderQuantity};
pub use selection::{resolve_selection, Selection, SelectionIds};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Order quantity applied when a tier with stock is first selected.
pub const DEFAULT_ORDER_QUANTITY: i64 = 1;

/// Longest label accepted for any catalogue entry.
pub const MAX_LABEL_LENGTH: usize = 100;

/// Largest box edge accepted, in millimetres.
pub const MAX_DIMENSION_MM: u32 = 5000;
