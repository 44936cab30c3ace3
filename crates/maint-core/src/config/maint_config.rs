//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AuditConfig, RestoreConfig};
use crate::errors::ConfigError;

/// Name of the project config file looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "maint.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`MAINT_*`)
/// 3. Project config (`maint.toml` in the project root)
/// 4. Compiled defaults
///
/// Each tool loads and validates only its own section, so a bad value
/// meant for one tool never stops the other.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MaintConfig {
    pub audit: AuditConfig,
    pub restore: RestoreConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub restore_source_ref: Option<String>,
}

impl MaintConfig {
    /// Resolve all layers rooted at `root` and return the validated audit section.
    pub fn load_audit(root: &Path) -> Result<AuditConfig, ConfigError> {
        let config = Self::resolve(root, None)?;
        Self::validate_audit(&config.audit)?;
        Ok(config.audit)
    }

    /// Resolve all layers rooted at `root` and return the validated restore section.
    pub fn load_restore(
        root: &Path,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<RestoreConfig, ConfigError> {
        let config = Self::resolve(root, cli_overrides)?;
        Self::validate_restore(&config.restore)?;
        Ok(config.restore)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the audit section.
    pub fn validate_audit(audit: &AuditConfig) -> Result<(), ConfigError> {
        if audit.default_roots.iter().any(|r| r.trim().is_empty()) {
            return Err(ConfigError::ValidationFailed {
                field: "audit.default_roots".to_string(),
                message: "root paths must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Validate the restore section.
    pub fn validate_restore(restore: &RestoreConfig) -> Result<(), ConfigError> {
        if let Some(ref source_ref) = restore.source_ref {
            if source_ref.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "restore.source_ref".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply every layer without validating.
    fn resolve(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Ok(config)
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut MaintConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: MaintConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; only values set in `other` win.
    fn merge(base: &mut MaintConfig, other: &MaintConfig) {
        if !other.audit.default_roots.is_empty() {
            base.audit.default_roots = other.audit.default_roots.clone();
        }
        if other.restore.source_ref.is_some() {
            base.restore.source_ref = other.restore.source_ref.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `MAINT_AUDIT_DEFAULT_ROOTS`, `MAINT_RESTORE_SOURCE_REF`.
    fn apply_env_overrides(config: &mut MaintConfig) {
        if let Ok(val) = std::env::var("MAINT_AUDIT_DEFAULT_ROOTS") {
            let roots: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !roots.is_empty() {
                config.audit.default_roots = roots;
            }
        }
        if let Ok(val) = std::env::var("MAINT_RESTORE_SOURCE_REF") {
            config.restore.source_ref = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut MaintConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.restore_source_ref {
            config.restore.source_ref = Some(v.clone());
        }
    }
}
