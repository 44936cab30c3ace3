//! Configuration system for the maintenance tools.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod audit_config;
pub mod maint_config;
pub mod restore_config;

pub use audit_config::AuditConfig;
pub use maint_config::{CliOverrides, MaintConfig};
pub use restore_config::RestoreConfig;
