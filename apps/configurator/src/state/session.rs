//! # Session State
//!
//! Holds the configurator session this process serves.
//!
//! ## Session Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action               Command                 Session Change         │
//! │  ─────────               ───────                 ──────────────         │
//! │  Pick material ────────► selectOption() ───────► ids.material = n      │
//! │  Pick stock tier ──────► selectOption() ───────► ids.tier = n, clamp   │
//! │  Type quantity ────────► setOrderQuantity() ───► quantity = clamp(n)   │
//! │  Admin saved catalogue ► reloadCatalogue() ────► snapshot swapped      │
//! │  Render price ─────────► getQuote() ───────────► (read only)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use boxcraft_core::{Catalogue, Configurator};
use uuid::Uuid;

/// The shared configurator session.
///
/// `Arc<Mutex<_>>` so the session can be handed to whatever front end
/// drives it; every command holds the lock only for its own duration.
#[derive(Debug, Clone)]
pub struct SessionState {
    id: Uuid,
    configurator: Arc<Mutex<Configurator>>,
}

impl SessionState {
    /// Starts a fresh session over a catalogue snapshot.
    pub fn new(catalogue: Catalogue) -> Self {
        SessionState {
            id: Uuid::new_v4(),
            configurator: Arc::new(Mutex::new(Configurator::new(catalogue))),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Configurator) -> R,
    {
        // Session updates never panic between writes, so a poisoned lock is still consistent
        let session = self.configurator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&session)
    }

    /// Executes a function with write access to the session.
    pub fn with_session_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Configurator) -> R,
    {
        let mut session = self.configurator.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxcraft_core::{OptionCategory, OptionId};

    #[test]
    fn test_clones_share_one_session() {
        let state = SessionState::new(Catalogue::default());
        let other = state.clone();

        state.with_session_mut(|s| s.select(OptionCategory::Size, OptionId(4)));
        assert_eq!(other.with_session(|s| s.ids().size), Some(OptionId(4)));
        assert_eq!(state.id(), other.id());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        let a = SessionState::new(Catalogue::default());
        let b = SessionState::new(Catalogue::default());
        assert_ne!(a.id(), b.id());
    }
}
