//! # Configuration State
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`BOXCRAFT_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use boxcraft_core::Money;
use directories::ProjectDirs;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Catalogue snapshot exported by the storage layer
    pub catalogue_path: PathBuf,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Refuse catalogues that break data-entry rules.
    /// When false, problems are logged and the snapshot is used anyway.
    pub strict_catalogue: bool,
}

impl Default for ConfigState {
    /// ## Default Values
    /// - Catalogue: `<platform config dir>/catalogue.json`
    /// - Currency: `$`, 2 decimals
    /// - Strict catalogue validation
    fn default() -> Self {
        ConfigState {
            catalogue_path: default_catalogue_path(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            strict_catalogue: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `BOXCRAFT_CATALOGUE_PATH`: catalogue snapshot location
    /// - `BOXCRAFT_CURRENCY_SYMBOL`: display symbol
    /// - `BOXCRAFT_CURRENCY_DECIMALS`: display decimals (0-4)
    /// - `BOXCRAFT_STRICT_CATALOGUE`: `true` / `false`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(path) = lookup("BOXCRAFT_CATALOGUE_PATH") {
            config.catalogue_path = PathBuf::from(path);
        }

        if let Some(symbol) = lookup("BOXCRAFT_CURRENCY_SYMBOL") {
            config.currency_symbol = symbol;
        }

        if let Some(decimals) = lookup("BOXCRAFT_CURRENCY_DECIMALS") {
            config.currency_decimals = decimals
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|d| *d <= 4)
                .ok_or_else(|| {
                    ConfigError::InvalidValue("BOXCRAFT_CURRENCY_DECIMALS".to_string())
                })?;
        }

        if let Some(strict) = lookup("BOXCRAFT_STRICT_CATALOGUE") {
            config.strict_catalogue = strict
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BOXCRAFT_STRICT_CATALOGUE".to_string()))?;
        }

        Ok(config)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use boxcraft_configurator::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(24400), "$244.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        // Half-up, the same rule as unit-price rounding
        let places = u32::from(self.currency_decimals);
        let amount = Money::from_cents(cents)
            .to_decimal()
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        let negative = amount.is_sign_negative() && !amount.is_zero();
        let sign = if negative { "-" } else { "" };

        format!(
            "{}{}{:.*}",
            sign,
            self.currency_symbol,
            usize::from(self.currency_decimals),
            amount.abs()
        )
    }
}

fn default_catalogue_path() -> PathBuf {
    ProjectDirs::from("com", "boxcraft", "configurator")
        .map(|dirs| dirs.config_dir().join("catalogue.json"))
        .unwrap_or_else(|| PathBuf::from("catalogue.json"))
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
