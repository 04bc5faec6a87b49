//! # Quote Commands
//!
//! Commands that change the selection or order quantity, and the read-only
//! views that render the live price.
//!
//! ## Pricing Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌───────────┐    selectOption     ┌───────────┐    getQuote           │
//! │  │  Default  │ ──────────────────► │  Custom   │ ──────────────►  UI   │
//! │  │ (index 0) │ ◄────────────────── │ selection │                       │
//! │  └───────────┘   reloadCatalogue   └───────────┘                       │
//! │                  (stale ids fall         │                              │
//! │                   back silently)         │ setOrderQuantity             │
//! │                                          ▼                              │
//! │                                   quantity clamped to tier stock        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use boxcraft_core::quantity::parse_quantity_input;
use boxcraft_core::{
    compute_price, Configurator, CoreError, OptionCategory, OptionId, SelectionIds,
};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Live price for the current selection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub session_id: Uuid,
    /// Ids actually priced, after fallbacks
    pub selection: SelectionIds,
    pub order_quantity: i64,
    pub max_stock: i64,
    pub unit_price_cents: i64,
    pub subtotal_cents: i64,
    pub unit_price_display: String,
    pub subtotal_display: String,
    pub modifier: String,
    /// Categories whose stored id was stale and fell back to the first option
    pub fallbacks: Vec<OptionCategory>,
    pub quoted_at: DateTime<Utc>,
}

/// Stored ids next to what they resolve to.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    pub session_id: Uuid,
    pub stored: SelectionIds,
    /// `None` while a required category is empty
    pub resolved: Option<SelectionIds>,
    pub fallbacks: Vec<OptionCategory>,
    pub order_quantity: i64,
    pub quantity_set: bool,
}

/// Prices the current selection.
///
/// ## Returns
/// The live quote, or `EMPTY_CATALOGUE` naming the first required category
/// with no options.
pub fn get_quote(session: &SessionState, config: &ConfigState) -> Result<QuoteResponse, ApiError> {
    debug!("get_quote command");
    let session_id = session.id();
    session.with_session(|c| build_quote(session_id, config, c))
}

/// Current stored and resolved ids.
pub fn get_selection(session: &SessionState) -> SelectionResponse {
    debug!("get_selection command");
    let session_id = session.id();
    session.with_session(|c| {
        let resolved = c.resolved();
        SelectionResponse {
            session_id,
            stored: *c.ids(),
            resolved: resolved
                .as_ref()
                .map(|r| SelectionIds::from_selection(&r.selection)),
            fallbacks: resolved
                .as_ref()
                .map(|r| r.fallbacks().to_vec())
                .unwrap_or_default(),
            order_quantity: c.order_quantity(),
            quantity_set: c.quantity_state().is_set(),
        }
    })
}

/// Stores a choice and re-prices.
///
/// ## Behavior
/// - Any category: the id is stored even when the catalogue lacks it, and
///   pricing falls back to the first option until it appears
/// - Quantity tier: the order quantity is re-clamped against the new stock
///   ceiling (lowered, never raised from zero)
pub fn select_option(
    session: &SessionState,
    config: &ConfigState,
    category: OptionCategory,
    option_id: OptionId,
) -> Result<QuoteResponse, ApiError> {
    debug!(%category, %option_id, "select_option command");
    let session_id = session.id();

    session.with_session_mut(|c| {
        if !c.catalogue().contains(category, option_id) {
            warn!(
                %category,
                %option_id,
                "Selected option is not in the catalogue, pricing will fall back"
            );
        }

        if c.select(category, option_id) {
            debug!(order_quantity = c.order_quantity(), "Order quantity re-clamped");
        }

        build_quote(session_id, config, c)
    })
}

/// Applies what the user typed into the quantity field.
///
/// Blank or unparseable input counts as zero; fractions are floored; the
/// result is capped at the selected tier's stock.
pub fn set_order_quantity(
    session: &SessionState,
    config: &ConfigState,
    requested: &str,
) -> Result<QuoteResponse, ApiError> {
    let parsed = parse_quantity_input(requested);
    let session_id = session.id();

    session.with_session_mut(|c| {
        let applied = c.set_order_quantity(parsed);
        debug!(requested, applied, "set_order_quantity command");
        build_quote(session_id, config, c)
    })
}

fn build_quote(
    session_id: Uuid,
    config: &ConfigState,
    configurator: &Configurator,
) -> Result<QuoteResponse, ApiError> {
    let resolved = configurator.resolved().ok_or_else(|| {
        let category = configurator
            .catalogue()
            .first_empty_required()
            .unwrap_or(OptionCategory::Size);
        ApiError::from(CoreError::EmptyCategory(category))
    })?;

    let quote = compute_price(&resolved.selection, configurator.order_quantity());

    Ok(QuoteResponse {
        session_id,
        selection: SelectionIds::from_selection(&resolved.selection),
        order_quantity: quote.order_quantity,
        max_stock: resolved.selection.max_stock(),
        unit_price_cents: quote.unit_price.cents(),
        subtotal_cents: quote.subtotal.cents(),
        unit_price_display: config.format_currency(quote.unit_price.cents()),
        subtotal_display: config.format_currency(quote.subtotal.cents()),
        modifier: quote.modifier.to_string(),
        fallbacks: resolved.fallbacks().to_vec(),
        quoted_at: Utc::now(),
    })
}
