//! # Application State
//!
//! - [`SessionState`] - the configurator session (shared, mutex-guarded)
//! - [`ConfigState`] - read-only configuration loaded at startup

mod config;
mod session;

pub use config::{ConfigError, ConfigState};
pub use session::SessionState;
