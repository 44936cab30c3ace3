//! Stable error codes for machine-readable reports.

/// Every error enum implements this to expose a structured code string
/// that survives into JSON output.
pub trait MaintErrorCode {
    /// Returns the error code string (e.g., "AUDIT_READ_ERROR").
    fn error_code(&self) -> &'static str;
}

pub const AUDIT_READ_ERROR: &str = "AUDIT_READ_ERROR";
pub const AUDIT_WALK_ERROR: &str = "AUDIT_WALK_ERROR";
pub const RESTORE_FAILED: &str = "RESTORE_FAILED";
pub const SHELL_UNAVAILABLE: &str = "SHELL_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
