//! # Boxcraft Configurator
//!
//! Line-oriented JSON front end over `boxcraft-core`. A storefront or admin
//! tool spawns the process, writes one command per line to stdin, and reads
//! one response per line from stdout. Logs go to stderr.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Boxcraft Configurator                              │
//! │                                                                         │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                    Front End (storefront UI)                      │ │
//! │  │        {"command":"selectOption","args":{...}}  ──► stdin         │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                    serve() loop (this crate)                      │ │
//! │  │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────────┐   │ │
//! │  │  │  commands/  │  │   state/    │  │      catalogue.rs       │   │ │
//! │  │  │  quote      │  │  session    │  │  load + validate JSON   │   │ │
//! │  │  │  catalogue  │  │  config     │  │  snapshot from disk     │   │ │
//! │  │  └─────────────┘  └─────────────┘  └─────────────────────────┘   │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌───────────────────────────────────────────────────────────────────┐ │
//! │  │                       boxcraft-core                               │ │
//! │  │     pricing, selection fallback, quantity clamping, validation    │ │
//! │  └───────────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//! - [`commands`]: Request decoding, dispatch, and the per-command handlers
//! - [`state`]: Session and configuration state
//! - [`catalogue`]: Snapshot loading
//! - [`error`]: API error type

pub mod catalogue;
pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::catalogue::load_catalogue;
use crate::commands::{dispatch, Request, Response};
use crate::error::ApiError;
use crate::state::{ConfigState, SessionState};

/// Application entry point.
///
/// ## Startup Sequence
/// 1. Initialize logging (tracing)
/// 2. Read configuration from the environment
/// 3. Load the catalogue snapshot
/// 4. Start a session and serve stdin until it closes
pub fn run() -> Result<(), ApiError> {
    init_tracing();

    info!("Starting Boxcraft configurator");

    let config = ConfigState::from_env()?;
    info!(
        catalogue_path = ?config.catalogue_path,
        strict = config.strict_catalogue,
        "Configuration loaded"
    );

    let catalogue = load_catalogue(&config.catalogue_path, config.strict_catalogue)?;
    let session = SessionState::new(catalogue);
    info!(session_id = %session.id(), "Session started");

    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&session, &config, stdin.lock(), stdout.lock())?;

    info!(session_id = %session.id(), "Input closed, shutting down");
    Ok(())
}

/// Answers one JSON command per input line until the input ends.
///
/// A line that does not decode gets a `MALFORMED_REQUEST` response; the
/// loop keeps going. Only a failure to write the response stops it.
pub fn serve<R, W>(
    session: &SessionState,
    config: &ConfigState,
    input: R,
    mut output: W,
) -> Result<(), ApiError>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let result = serde_json::from_str::<Request>(line)
            .map_err(|e| {
                warn!(error = %e, "Could not decode request");
                ApiError::malformed(format!("Could not decode request: {}", e))
            })
            .and_then(|request| dispatch(session, config, request));

        if let Err(err) = &result {
            debug!(code = ?err.code, message = %err.message, "Command failed");
        }

        serde_json::to_writer(&mut output, &Response::from(result))?;
        output.write_all(b"\n")?;
        output.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for logging.
///
/// ## Log Levels
/// - `RUST_LOG` overrides the default filter
/// - Default: `info,boxcraft=debug`
///
/// Logs go to stderr so stdout carries responses only.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,boxcraft=debug"));

    // A host embedding the library may have installed its own subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
