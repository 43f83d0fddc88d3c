#![forbid(unsafe_code)]

//! Structured logging.
//!
//! With the `tracing` feature the `debug` and `warn` macros are re-exported
//! here (and at the crate root) for crates that do not depend on `tracing`
//! themselves. With
//! `tracing-json`, [`init_json_subscriber`] installs a JSON formatter filtered
//! by `RUST_LOG` (default `info`).

#[cfg(feature = "tracing")]
pub use tracing::{debug, warn};

/// Install a global JSON subscriber reading its filter from `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already set.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_current_span(true)
        .try_init()
        .is_ok()
}
