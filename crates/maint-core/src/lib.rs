//! maint-core: shared plumbing for the monorepo maintenance tools.
//!
//! - Errors: one `thiserror` enum per tool, with stable error codes
//! - Config: TOML-based layered resolution (CLI > env > project > defaults)
//! - Tracing: `EnvFilter`-driven subscriber writing to stderr

pub mod config;
pub mod errors;
pub mod tracing;

pub use config::{AuditConfig, CliOverrides, MaintConfig, RestoreConfig};
pub use errors::{AuditError, ConfigError, MaintErrorCode, RestoreError};
