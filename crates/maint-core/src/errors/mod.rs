//! Error handling for the maintenance tools.
//! One error enum per subsystem, `thiserror` only.

pub mod audit_error;
pub mod config_error;
pub mod error_code;
pub mod restore_error;

pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use error_code::MaintErrorCode;
pub use restore_error::RestoreError;
