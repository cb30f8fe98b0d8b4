//! # Observability & Tracing
//!
//! Structured logging setup for anything embedding this crate.
//!
//! The service layer logs with the `tracing` crate: `#[instrument]` spans on
//! every operation, `info!` events on the mutating success paths (deactivate,
//! deposit, payment), and `debug!` events inside the in-memory store. Failure
//! paths are not logged here — classified errors propagate to the caller and
//! it decides what to record.
//!
//! ## Usage
//!
//! ```bash
//! # Info-level events only
//! RUST_LOG=info cargo test -- --nocapture
//!
//! # Include the store's per-row debug events
//! RUST_LOG=user_accounts=debug cargo test -- --nocapture
//! ```

/// Initializes the tracing/logging infrastructure.
///
/// Sets up `tracing-subscriber`'s fmt layer with environment-based filtering,
/// so verbosity is controlled via the `RUST_LOG` environment variable.
///
/// Call this once per process, from the embedding binary or test harness.
///
/// # Example
///
/// ```ignore
/// setup_tracing();
/// tracing::info!("Service starting");
/// ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}
