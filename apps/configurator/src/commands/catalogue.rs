//! # Catalogue Commands
//!
//! Exposes the catalogue snapshot and swaps in a fresh one after the admin
//! side saves changes.

use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use boxcraft_core::{Catalogue, OptionCategory};

use crate::catalogue::load_catalogue;
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Outcome of a catalogue reload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReloadResponse {
    pub session_id: Uuid,
    /// Whether the order quantity was re-clamped against a changed tier
    pub quantity_reclamped: bool,
    pub order_quantity: i64,
    /// Stored ids the new snapshot no longer carries
    pub fallbacks: Vec<OptionCategory>,
}

/// Returns the catalogue the session is pricing against.
pub fn get_catalogue(session: &SessionState) -> Catalogue {
    debug!("get_catalogue command");
    session.with_session(|c| c.catalogue().clone())
}

/// Re-reads the snapshot from disk and hands it to the session.
///
/// Stored ids are kept; any the new snapshot lacks fall back to the first
/// option of their category on the next quote.
pub fn reload_catalogue(
    session: &SessionState,
    config: &ConfigState,
) -> Result<ReloadResponse, ApiError> {
    debug!(path = %config.catalogue_path.display(), "reload_catalogue command");
    let catalogue = load_catalogue(&config.catalogue_path, config.strict_catalogue)?;

    let response = session.with_session_mut(|c| {
        let quantity_reclamped = c.replace_catalogue(catalogue);
        ReloadResponse {
            session_id: session.id(),
            quantity_reclamped,
            order_quantity: c.order_quantity(),
            fallbacks: c
                .resolved()
                .map(|r| r.fallbacks().to_vec())
                .unwrap_or_default(),
        }
    });

    info!(
        quantity_reclamped = response.quantity_reclamped,
        order_quantity = response.order_quantity,
        fallbacks = response.fallbacks.len(),
        "Catalogue reloaded"
    );

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use boxcraft_core::OptionId;

    const FIXTURE: &str = include_str!("../../fixtures/catalogue.json");

    fn config_for(file: &tempfile::NamedTempFile) -> ConfigState {
        ConfigState {
            catalogue_path: file.path().to_path_buf(),
            ..ConfigState::default()
        }
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_get_catalogue() {
        let session = SessionState::new(Catalogue::from_json(FIXTURE).unwrap());
        let catalogue = get_catalogue(&session);
        assert_eq!(catalogue.colors.len(), 2);
    }

    #[test]
    fn test_reload_into_empty_session() {
        let file = write_temp(FIXTURE);
        let session = SessionState::new(Catalogue::default());

        let response = reload_catalogue(&session, &config_for(&file)).unwrap();
        assert!(response.quantity_reclamped);
        assert_eq!(response.order_quantity, 1);
        assert!(response.fallbacks.is_empty());
    }

    #[test]
    fn test_reload_with_removed_option() {
        let session = SessionState::new(Catalogue::from_json(FIXTURE).unwrap());
        session.with_session_mut(|c| c.select(OptionCategory::Finish, OptionId(2)));

        let mut next = Catalogue::from_json(FIXTURE).unwrap();
        next.finishes.retain(|f| f.id != OptionId(2));
        let file = write_temp(&serde_json::to_string(&next).unwrap());

        let response = reload_catalogue(&session, &config_for(&file)).unwrap();
        assert!(!response.quantity_reclamped);
        assert_eq!(response.fallbacks, vec![OptionCategory::Finish]);
    }

    #[test]
    fn test_reload_failure_keeps_old_snapshot() {
        let file = write_temp("[]");
        let session = SessionState::new(Catalogue::from_json(FIXTURE).unwrap());

        assert!(reload_catalogue(&session, &config_for(&file)).is_err());
        assert_eq!(get_catalogue(&session).sizes.len(), 2);
    }
}
