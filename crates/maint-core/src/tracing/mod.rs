//! Observability for the maintenance tools.
//! `tracing` crate with `EnvFilter`, output on stderr.

pub mod setup;

pub use setup::{init_tracing, LOG_ENV_VAR};
