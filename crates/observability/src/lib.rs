//! Observability: logging/tracing initialization for hosts embedding the
//! catalog engine.

pub mod tracing;

pub use tracing::init;
