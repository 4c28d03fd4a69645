//! Logging setup for library consumers.
//!
//! The library instruments its pipeline with `tracing` events; binaries call
//! [`init_logging`] once at startup to install a subscriber. Verbosity is
//! driven by the `SPRITEGRID_LOG` environment variable using standard
//! `EnvFilter` directives (e.g. `SPRITEGRID_LOG=spritegrid=debug`).

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable controlling log verbosity.
pub const LOG_ENV_VAR: &str = "SPRITEGRID_LOG";

/// Install the global tracing subscriber.
///
/// Defaults to `warn` when `SPRITEGRID_LOG` is unset. Output goes to stderr
/// so progress text on stdout stays clean. Calling this more than once is a
/// no-op after the first successful installation.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
