//! Process-level wiring that doesn't belong to any one domain module.

pub mod tracing;

pub use tracing::setup_tracing;
