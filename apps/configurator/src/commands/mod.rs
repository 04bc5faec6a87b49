//! # Commands
//!
//! Every command the configurator answers, and the JSON envelope around it.
//!
//! ## Wire Format
//! One request per line on stdin, one response per line on stdout:
//! ```text
//! → {"command":"selectOption","args":{"category":"quantity_tier","optionId":2}}
//! ← {"ok":true,"data":{"unitPriceCents":244,"subtotalCents":244,...}}
//!
//! → {"command":"setOrderQuantity","args":{"requested":"12.7"}}
//! ← {"ok":true,"data":{"orderQuantity":12,...}}
//!
//! → {"command":"frobnicate"}
//! ← {"ok":false,"error":{"code":"MALFORMED_REQUEST","message":"..."}}
//! ```

pub mod catalogue;
pub mod quote;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info_span;

use boxcraft_core::{OptionCategory, OptionId};

use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// A decoded command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "camelCase")]
pub enum Request {
    GetCatalogue,
    GetSelection,
    GetQuote,
    #[serde(rename_all = "camelCase")]
    SelectOption {
        category: OptionCategory,
        option_id: OptionId,
    },
    SetOrderQuantity {
        requested: QuantityInput,
    },
    ReloadCatalogue,
}

impl Request {
    pub fn name(&self) -> &'static str {
        match self {
            Request::GetCatalogue => "getCatalogue",
            Request::GetSelection => "getSelection",
            Request::GetQuote => "getQuote",
            Request::SelectOption { .. } => "selectOption",
            Request::SetOrderQuantity { .. } => "setOrderQuantity",
            Request::ReloadCatalogue => "reloadCatalogue",
        }
    }
}

/// Quantity as the input field sent it: a JSON number or the raw text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(serde_json::Number),
    Text(String),
}

impl QuantityInput {
    pub fn as_text(&self) -> String {
        match self {
            QuantityInput::Number(n) => n.to_string(),
            QuantityInput::Text(s) => s.clone(),
        }
    }
}

/// Response envelope.
#[derive(Debug, Serialize)]
pub struct Response {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl From<Result<Value, ApiError>> for Response {
    fn from(result: Result<Value, ApiError>) -> Self {
        match result {
            Ok(data) => Response {
                ok: true,
                data: Some(data),
                error: None,
            },
            Err(error) => Response {
                ok: false,
                data: None,
                error: Some(error),
            },
        }
    }
}

/// Runs one request against the session.
pub fn dispatch(
    session: &SessionState,
    config: &ConfigState,
    request: Request,
) -> Result<Value, ApiError> {
    let span = info_span!("command", session_id = %session.id(), command = request.name());
    let _enter = span.enter();

    let data = match request {
        Request::GetCatalogue => serde_json::to_value(catalogue::get_catalogue(session))?,
        Request::GetSelection => serde_json::to_value(quote::get_selection(session))?,
        Request::GetQuote => serde_json::to_value(quote::get_quote(session, config)?)?,
        Request::SelectOption {
            category,
            option_id,
        } => serde_json::to_value(quote::select_option(session, config, category, option_id)?)?,
        Request::SetOrderQuantity { requested } => serde_json::to_value(
            quote::set_order_quantity(session, config, &requested.as_text())?,
        )?,
        Request::ReloadCatalogue => {
            serde_json::to_value(catalogue::reload_catalogue(session, config)?)?
        }
    };

    Ok(data)
}
